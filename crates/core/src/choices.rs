//! Closed choice sets stored as keys and exchanged as labels.
//!
//! Each choice enum carries an explicit table of `(variant, key, label)`
//! rows. The key (`"MALE"`) is what the database stores; the label
//! (`"Male"`) is what clients send and receive. Inbound labels outside the
//! table are rejected at the payload boundary.

use std::borrow::Cow;

use validator::ValidationError;

/// A fixed set of values with a stored key and a wire label per value.
pub trait Choice: Copy + Eq + Default + 'static {
    /// Every accepted value as `(variant, stored key, wire label)`.
    const CHOICES: &'static [(Self, &'static str, &'static str)];

    fn key(self) -> &'static str {
        Self::CHOICES
            .iter()
            .find(|(v, _, _)| *v == self)
            .map_or("", |(_, key, _)| *key)
    }

    fn label(self) -> &'static str {
        Self::CHOICES
            .iter()
            .find(|(v, _, _)| *v == self)
            .map_or("", |(_, _, label)| *label)
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::CHOICES
            .iter()
            .find(|(_, k, _)| *k == key)
            .map(|(v, _, _)| *v)
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::CHOICES
            .iter()
            .find(|(_, _, l)| *l == label)
            .map(|(v, _, _)| *v)
    }
}

macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($key:literal, $label:literal) ),+ $(,)?
        }
        default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Choice for $name {
            const CHOICES: &'static [(Self, &'static str, &'static str)] =
                &[ $( ($name::$variant, $key, $label) ),+ ];
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

define_choice_enum! {
    /// Sex of a dog.
    Sex {
        Male => ("MALE", "Male"),
        Female => ("FEMALE", "Female"),
        Unknown => ("UNKNOWN", "Unknown"),
    }
    default = Unknown
}

define_choice_enum! {
    /// Observed temperament of a dog.
    Behavior {
        Calm => ("CALM", "Calm"),
        Aggressive => ("AGGRESSIVE", "Aggressive"),
        Playful => ("PLAYFUL", "Playful"),
        Unknown => ("UNKNOWN", "Unknown"),
    }
    default = Unknown
}

/// Map an inbound label to its stored key. A blank label is treated like
/// any other label outside the table.
pub fn to_internal_value<C: Choice>(label: &str) -> Result<&'static str, ValidationError> {
    C::from_label(label).map(C::key).ok_or_else(|| invalid_choice(label))
}

/// Render a stored key as its label. Keys outside the table (and blank
/// values) are returned unchanged.
pub fn to_representation<C: Choice>(key: &str) -> &str {
    C::from_key(key).map_or(key, |choice| choice.label())
}

fn invalid_choice(input: &str) -> ValidationError {
    let mut err = ValidationError::new("invalid_choice")
        .with_message(Cow::Owned(format!("\"{input}\" is not a valid choice.")));
    err.add_param(Cow::Borrowed("input"), &input);
    err
}
