//! The app shell that receives accepted registrations.

use std::fs;
use std::io::Write;
use std::path::Path;

use crossterm::style::Stylize;
use log::info;
use signup_lib::{Field, RegisterHandler, RegistrationForm, RegistrationInput, SUCCESS_MESSAGE};

use crate::error::CliError;

/// Keeps the last accepted record in memory.
#[derive(Debug, Default)]
pub struct AppShell {
    user_data: Option<RegistrationInput>,
    registrations: usize,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently accepted record.
    pub fn user_data(&self) -> Option<&RegistrationInput> {
        self.user_data.as_ref()
    }

    /// How many records were accepted in this process.
    pub fn registrations(&self) -> usize {
        self.registrations
    }
}

impl RegisterHandler for AppShell {
    fn on_register(&mut self, data: RegistrationInput) {
        info!("Stored registration for '{}'", data.username);
        self.user_data = Some(data);
        self.registrations += 1;
    }
}

/// Print the success acknowledgment and the non-secret fields.
pub fn write_acknowledgment<W: Write>(out: &mut W, data: &RegistrationInput) -> Result<(), CliError> {
    writeln!(out, "{}", format!("Success: {}", SUCCESS_MESSAGE).green())?;
    for field in Field::ALL.into_iter().filter(|f| !f.is_secret()) {
        writeln!(out, "  {:<10} {}", field.name(), data.get(field))?;
    }
    Ok(())
}

/// Load a prefilled record from a JSON file with camelCase keys.
pub fn load_record(path: &Path) -> Result<RegistrationInput, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Submit a prefilled record once. Returns whether it was accepted.
///
/// The acknowledgment goes to `out`, a rejection message to `err_out`.
pub fn submit_record<W: Write, E: Write>(
    record: RegistrationInput,
    shell: &mut AppShell,
    out: &mut W,
    err_out: &mut E,
) -> Result<bool, CliError> {
    let mut form = RegistrationForm::new();
    for field in Field::ALL {
        form.set(field, record.get(field));
    }

    let status = form.submit(shell).clone();
    match status.error() {
        Some(err) => {
            writeln!(err_out, "{}", err.to_string().red())?;
            Ok(false)
        }
        None => {
            write_acknowledgment(out, form.input())?;
            Ok(true)
        }
    }
}
