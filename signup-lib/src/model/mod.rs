//! Form data model

mod field;
mod gender;
mod record;

pub use field::Field;
pub use gender::Gender;
pub use record::RegistrationInput;
