use crate::model::RegistrationInput;

/// Receives a record once it passes validation.
pub trait RegisterHandler {
    fn on_register(&mut self, data: RegistrationInput);
}

impl<F> RegisterHandler for F
where
    F: FnMut(RegistrationInput),
{
    fn on_register(&mut self, data: RegistrationInput) {
        self(data)
    }
}
