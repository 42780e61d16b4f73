use crate::error::ValidationError;

/// Acknowledgment shown after a successful submit.
pub const SUCCESS_MESSAGE: &str = "Registration successful!";

/// What the form shows after the last submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// The last submit failed this check.
    Error(ValidationError),
    /// The last submit was accepted.
    Success,
}

impl FormStatus {
    /// Message to display, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Error(err) => Some(err.to_string()),
            Self::Success => Some(SUCCESS_MESSAGE.to_string()),
        }
    }

    /// The validation error, if the last submit failed.
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
