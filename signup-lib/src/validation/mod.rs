//! Validation for the registration form.
//!
//! [`Validator`] is a small fluent builder over any record type. Rules run in
//! the order they were added and the first failure is returned; there is no
//! error accumulation.
//!
//! # Example
//!
//! ```
//! use signup_lib::error::ValidationError;
//! use signup_lib::validation::Validator;
//!
//! struct Login {
//!     name: String,
//! }
//!
//! let validator = Validator::new()
//!     .field(|l: &Login| l.name.as_str())
//!     .min_length(3, ValidationError::UsernameTooShort)
//!     .build();
//!
//! assert!(validator.validate(&Login { name: "ada".into() }).is_ok());
//! assert!(validator.validate(&Login { name: "al".into() }).is_err());
//! ```
//!
//! The registration rule set itself is exposed through [`validate`].

mod registration;
mod rules;
mod validator;

pub use registration::{registration_validator, validate, validate_ref};
pub use rules::{DATE_PATTERN, EMAIL_PATTERN, is_date_format, is_valid_email, parse_date_of_birth};
pub use validator::{FieldBuilder, Validator};
