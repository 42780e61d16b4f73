//! Field identifiers for the registration record

use std::fmt;
use std::str::FromStr;

use crate::error::FieldParseError;

/// One of the six registration fields, in the order the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Gender,
    DateOfBirth,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::Username,
        Field::Gender,
        Field::DateOfBirth,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Record key, as used in serialized records.
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Gender => "gender",
            Field::DateOfBirth => "dateOfBirth",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Prompt text shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Gender => "Gender",
            Field::DateOfBirth => "Date of birth (YYYY-MM-DD)",
            Field::Email => "Email (something@example.com)",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the value must not be echoed or logged.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldParseError;

    /// Accepts the record key (`dateOfBirth`) or the snake_case form
    /// (`date_of_birth`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| FieldParseError::new(s))
    }
}
