//! Shared field checks and messages for inbound payloads.
//!
//! The `validator` derive handles presence, length and range; the custom
//! checks here cover what it cannot express (blankness after trimming).

use std::borrow::Cow;

use validator::ValidationError;

/// Maximum length, in characters, of short text fields (`Dog.name`, `Breed.title`).
pub const MAX_TEXT_LEN: usize = 1000;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_BLANK: &str = "This field may not be blank.";
pub const MSG_TOO_LONG: &str = "Ensure this field has no more than 1000 characters.";

/// Reject empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed(MSG_BLANK)));
    }
    Ok(())
}

/// Trim surrounding whitespace from an optional text value, keeping `None` as is.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
