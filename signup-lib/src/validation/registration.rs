//! The registration rule set

use std::sync::LazyLock;

use super::rules::{is_date_format, is_valid_email, parse_date_of_birth};
use super::validator::Validator;
use crate::error::ValidationError;
use crate::model::RegistrationInput;

static REGISTRATION: LazyLock<Validator<RegistrationInput>> =
    LazyLock::new(registration_validator);

/// Build the ordered registration checks.
///
/// 1. every field filled in
/// 2. username longer than two characters
/// 3. password matches its confirmation
/// 4. email address format
/// 5. date of birth format
/// 6. date of birth is a real calendar day
pub fn registration_validator() -> Validator<RegistrationInput> {
    Validator::new()
        .check(|input: &RegistrationInput| {
            let missing = input.empty_fields();
            if missing.is_empty() {
                Ok(())
            } else {
                Err(ValidationError::MissingFields { missing })
            }
        })
        .field(|input: &RegistrationInput| input.username.as_str())
        .min_length(3, ValidationError::UsernameTooShort)
        .field(|input: &RegistrationInput| input.password.as_str())
        .equals_field(
            |input: &RegistrationInput| input.confirm_password.as_str(),
            ValidationError::PasswordMismatch,
        )
        .field(|input: &RegistrationInput| input.email.as_str())
        .rule(is_valid_email, ValidationError::InvalidEmail)
        .field(|input: &RegistrationInput| input.date_of_birth.as_str())
        .rule(is_date_format, ValidationError::DateFormat)
        .rule(|dob| parse_date_of_birth(dob).is_some(), ValidationError::InvalidDate)
        .build()
}

/// Validate a registration record, handing it back unchanged when it passes.
///
/// Pure and idempotent: the same input always gives the same result.
pub fn validate(input: RegistrationInput) -> Result<RegistrationInput, ValidationError> {
    validate_ref(&input)?;
    Ok(input)
}

/// Borrowing variant of [`validate`].
pub fn validate_ref(input: &RegistrationInput) -> Result<(), ValidationError> {
    REGISTRATION.validate(input)
}
