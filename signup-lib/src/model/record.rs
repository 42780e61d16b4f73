//! The registration record

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Field;

/// Flat record holding everything the user typed into the form.
///
/// Every field is a plain string and may be empty while the user is still
/// typing; the invariants only hold after [`crate::validate`] accepts it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationInput {
    pub username: String,
    pub gender: String,
    pub date_of_birth: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationInput {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Gender => &self.gender,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Gender => &mut self.gender,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields that currently hold an empty string, in form order.
    pub fn empty_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| self.get(field).is_empty())
            .collect()
    }

    /// True while nothing has been typed into any field.
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("username", &self.username)
            .field("gender", &self.gender)
            .field("date_of_birth", &self.date_of_birth)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("confirm_password", &"[redacted]")
            .finish()
    }
}
