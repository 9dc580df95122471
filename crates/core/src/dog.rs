//! Inbound dog payload and its field checks.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::choices::{to_internal_value, Behavior, Choice, Sex};

/// Inbound representation of a dog (`POST /dogs/`, `PUT /dogs/{id}/`).
///
/// `sex` and `behavior` carry labels (`"Male"`), `breed` carries a breed
/// title. A full representation is expected on update: unset optional
/// fields fall back to their defaults rather than keeping stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DogPayload {
    #[validate(
        required(message = "This field is required."),
        custom(function = "crate::validation::not_blank"),
        length(max = 1000, message = "Ensure this field has no more than 1000 characters.")
    )]
    pub name: Option<String>,

    #[validate(custom(function = "validate_sex_label"))]
    pub sex: Option<String>,

    pub coat_color: Option<String>,

    #[validate(custom(function = "validate_behavior_label"))]
    pub behavior: Option<String>,

    /// Absent or `null` means the dog has no breed.
    #[validate(custom(function = "crate::breed::validate_title"))]
    pub breed: Option<String>,

    #[validate(
        required(message = "This field is required."),
        range(
            min = 0,
            max = 2147483647,
            message = "Ensure this value is between 0 and 2147483647."
        )
    )]
    pub age: Option<i64>,
}

impl DogPayload {
    /// Parsed `sex`, defaulting to [`Sex::Unknown`] when absent.
    ///
    /// Labels have already been checked by [`Validate::validate`]; an
    /// unrecognized label here also falls back to the default.
    pub fn sex(&self) -> Sex {
        self.sex
            .as_deref()
            .and_then(Sex::from_label)
            .unwrap_or_default()
    }

    /// Parsed `behavior`, defaulting to [`Behavior::Unknown`] when absent.
    pub fn behavior(&self) -> Behavior {
        self.behavior
            .as_deref()
            .and_then(Behavior::from_label)
            .unwrap_or_default()
    }
}

fn validate_sex_label(label: &str) -> Result<(), ValidationError> {
    to_internal_value::<Sex>(label).map(|_| ())
}

fn validate_behavior_label(label: &str) -> Result<(), ValidationError> {
    to_internal_value::<Behavior>(label).map(|_| ())
}
