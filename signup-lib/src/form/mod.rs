//! Registration form state.
//!
//! [`RegistrationForm`] owns the record while the user fills it in and tracks
//! what the screen shows: nothing, the latest validation error, or the success
//! acknowledgment. A successful submit hands the record to a
//! [`RegisterHandler`].

mod handler;
mod status;

pub use handler::RegisterHandler;
pub use status::{FormStatus, SUCCESS_MESSAGE};

use log::{debug, info};

use crate::model::{Field, Gender, RegistrationInput};
use crate::validation;

/// The registration form for a single session.
///
/// # Example
///
/// ```
/// use signup_lib::{Field, FormStatus, Gender, RegistrationForm, RegistrationInput};
///
/// let mut form = RegistrationForm::new();
/// form.set(Field::Username, "alice");
/// form.set_gender(Gender::Female);
/// form.set(Field::DateOfBirth, "1990-05-14");
/// form.set(Field::Email, "a@b.com");
/// form.set(Field::Password, "x");
/// form.set(Field::ConfirmPassword, "x");
///
/// let mut registered = Vec::new();
/// let status = form.submit(&mut |data: RegistrationInput| registered.push(data));
/// assert_eq!(status, &FormStatus::Success);
/// assert_eq!(registered.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    input: RegistrationInput,
    status: FormStatus,
}

impl RegistrationForm {
    /// Create an empty form in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The record as typed so far.
    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    /// The current field value.
    pub fn value(&self, field: Field) -> &str {
        self.input.get(field)
    }

    /// What the form currently shows.
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace a field value. The shown status is left alone until the next
    /// submit.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value);
    }

    /// Pick one of the offered gender options.
    pub fn set_gender(&mut self, gender: Gender) {
        self.set(Field::Gender, gender.as_str());
    }

    /// Validate the record and, if it passes, forward it to `handler`.
    ///
    /// A failed submit shows the first failing check and drops any earlier
    /// success. A passing submit clears any earlier error and calls the
    /// handler exactly once.
    pub fn submit<H>(&mut self, handler: &mut H) -> &FormStatus
    where
        H: RegisterHandler + ?Sized,
    {
        match validation::validate(self.input.clone()) {
            Ok(data) => {
                info!("Registration accepted for '{}'", data.username);
                self.status = FormStatus::Success;
                handler.on_register(data);
            }
            Err(err) => {
                debug!("Registration rejected: {}", err);
                self.status = FormStatus::Error(err);
            }
        }
        &self.status
    }

    /// Start a new session with an empty record.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
