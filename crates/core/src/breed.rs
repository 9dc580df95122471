//! Breed title normalization and the inbound breed payload.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::validation::{not_blank, MAX_TEXT_LEN, MSG_TOO_LONG};

/// Normalize a breed title: first character upper-cased, every other
/// character lower-cased.
///
/// Only the first character of the whole title is capitalized, so interior
/// words end up lower-case (`"Golden Retriever"` becomes `"Golden retriever"`).
/// Applying it twice gives the same result as applying it once.
///
/// ```
/// use kennel_core::breed::normalize_title;
///
/// assert_eq!(normalize_title("LABRADOR"), "Labrador");
/// assert_eq!(normalize_title("labrador retriever"), "Labrador retriever");
/// ```
pub fn normalize_title(title: &str) -> String {
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Field check for a submitted breed title: not blank, and no longer than
/// [`MAX_TEXT_LEN`] characters once normalized.
///
/// Lower-casing can grow a string (`'İ'` becomes `"i\u{307}"`), so the
/// limit is checked against the stored form rather than the submitted one.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    not_blank(title)?;
    if normalize_title(title.trim()).chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed(MSG_TOO_LONG)));
    }
    Ok(())
}

/// Inbound representation of a breed (`POST /breeds/`, `PUT /breeds/{id}/`).
///
/// Every field is optional at the serde level so that a missing `title`
/// surfaces as a field error rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BreedPayload {
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_title")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
}
