//! Validation error types

use crate::model::Field;

/// A failed registration check.
///
/// The `Display` output is the exact message shown to the user. Every variant
/// is recoverable: the user corrects the named fields and submits again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields were left empty.
    #[error("All fields are required, please fill all the fields")]
    MissingFields { missing: Vec<Field> },

    /// Username has two characters or fewer.
    #[error("Username must be longer than two characters")]
    UsernameTooShort,

    /// Password and its confirmation differ.
    #[error("Passwords are not the same, please check your passwords")]
    PasswordMismatch,

    /// Email does not look like an address.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Date of birth is not written as `YYYY-MM-DD`.
    #[error("Please enter a valid date of birth in the format YYYY-MM-DD")]
    DateFormat,

    /// Date of birth is well-formed but names no calendar day.
    #[error("Please enter a valid date of birth")]
    InvalidDate,
}

impl ValidationError {
    /// Creates a missing-fields error.
    pub fn missing(missing: impl IntoIterator<Item = Field>) -> Self {
        Self::MissingFields {
            missing: missing.into_iter().collect(),
        }
    }

    /// Fields the user has to correct, in form order.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::MissingFields { missing } => missing.clone(),
            Self::UsernameTooShort => vec![Field::Username],
            Self::PasswordMismatch => vec![Field::Password, Field::ConfirmPassword],
            Self::InvalidEmail => vec![Field::Email],
            Self::DateFormat | Self::InvalidDate => vec![Field::DateOfBirth],
        }
    }

    /// The first field to focus when showing this error.
    pub fn first_field(&self) -> Option<Field> {
        self.fields().first().copied()
    }
}
