//! Gender options offered by the form

use std::fmt;
use std::str::FromStr;

use crate::error::GenderParseError;

/// Gender choices the form presents.
///
/// The record keeps gender as a plain string; this enum only drives pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Options in display order.
    pub const OPTIONS: [Gender; 2] = [Gender::Female, Gender::Male];

    /// The string stored in the record.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = GenderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Gender::Female),
            "male" | "m" => Ok(Gender::Male),
            _ => Err(GenderParseError::new(s)),
        }
    }
}
