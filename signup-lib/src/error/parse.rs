//! Errors for parsing form enums from user text

/// Error returned when a string names no known form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field '{name}'")]
pub struct FieldParseError {
    pub name: String,
}

impl FieldParseError {
    /// Creates a new field parse error.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Error returned when a string is not one of the offered gender options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gender '{value}', expected Female or Male")]
pub struct GenderParseError {
    pub value: String,
}

impl GenderParseError {
    /// Creates a new gender parse error.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
