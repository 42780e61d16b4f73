//! Account registration form
//!
//! The form record, its ordered validation rules, and the submit state machine
//! that forwards an accepted record to a registration callback.

pub mod error;
pub mod form;
pub mod model;
pub mod validation;

pub use form::{FormStatus, RegisterHandler, RegistrationForm, SUCCESS_MESSAGE};
pub use model::{Field, Gender, RegistrationInput};
pub use validation::validate;
