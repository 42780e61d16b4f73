//! Interactive prompting over any reader and writer.

use std::io::{BufRead, Write};

use crossterm::style::Stylize;
use signup_lib::{Field, Gender, RegistrationForm};

use crate::error::CliError;
use crate::shell::{AppShell, write_acknowledgment};

const TITLE: &str = "Account Registration";

/// A prompt session reading answers line by line.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for every field, then keep re-asking the fields named by each
    /// validation error until the form is accepted.
    pub fn run(&mut self, form: &mut RegistrationForm, shell: &mut AppShell) -> Result<(), CliError> {
        writeln!(self.output, "{}", TITLE.bold())?;

        let mut pending = Field::ALL.to_vec();
        loop {
            for &field in &pending {
                self.ask(form, field)?;
            }

            let status = form.submit(shell).clone();
            match status.error() {
                Some(err) => {
                    writeln!(self.output, "{}", err.to_string().red())?;
                    pending = err.fields();
                }
                None => {
                    write_acknowledgment(&mut self.output, form.input())?;
                    return Ok(());
                }
            }
        }
    }

    fn ask(&mut self, form: &mut RegistrationForm, field: Field) -> Result<(), CliError> {
        if field == Field::Gender {
            return self.ask_gender(form);
        }

        write!(self.output, "{}: ", field.label())?;
        self.output.flush()?;
        let answer = self.read_line()?;
        form.set(field, answer);
        Ok(())
    }

    /// An empty answer leaves gender unset so the required check reports it.
    fn ask_gender(&mut self, form: &mut RegistrationForm) -> Result<(), CliError> {
        let options: Vec<&str> = Gender::OPTIONS.iter().map(|g| g.as_str()).collect();
        loop {
            write!(self.output, "{} [{}]: ", Field::Gender.label(), options.join("/"))?;
            self.output.flush()?;
            let answer = self.read_line()?;
            if answer.is_empty() {
                form.set(Field::Gender, "");
                return Ok(());
            }
            match answer.parse::<Gender>() {
                Ok(gender) => {
                    form.set_gender(gender);
                    return Ok(());
                }
                Err(err) => writeln!(self.output, "{}", err.to_string().red())?,
            }
        }
    }

    /// Read one line without its terminator. End of input cancels the session.
    fn read_line(&mut self) -> Result<String, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::Cancelled);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use signup_lib::FormStatus;

    use super::*;

    fn run(answers: &str) -> (Result<(), CliError>, RegistrationForm, AppShell, String) {
        let mut form = RegistrationForm::new();
        let mut shell = AppShell::new();
        let mut output = Vec::new();
        let result = Session::new(Cursor::new(answers.to_string()), &mut output)
            .run(&mut form, &mut shell);
        (result, form, shell, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_single_pass_registration() {
        let (result, form, shell, output) =
            run("alice\nFemale\n1990-05-14\na@b.com\nx\nx\n");

        assert!(result.is_ok());
        assert_eq!(form.status(), &FormStatus::Success);
        assert_eq!(shell.registrations(), 1);
        assert_eq!(shell.user_data().map(|d| d.username.as_str()), Some("alice"));
        assert!(output.contains(TITLE));
        assert!(output.contains("Registration successful!"));
    }

    #[test]
    fn test_reasks_only_offending_field() {
        // Username too short, then corrected; other answers are kept.
        let (result, form, _, output) =
            run("al\nm\n1990-05-14\na@b.com\nx\nx\nalice\n");

        assert!(result.is_ok());
        assert!(output.contains("Username must be longer than two characters"));
        assert_eq!(output.matches("Username: ").count(), 2);
        assert_eq!(output.matches("Email (something@example.com): ").count(), 1);
        assert_eq!(form.value(Field::Gender), "Male");
    }

    #[test]
    fn test_password_mismatch_reasks_both() {
        let (result, form, _, output) =
            run("alice\nf\n1990-05-14\na@b.com\none\ntwo\nsame\nsame\n");

        assert!(result.is_ok());
        assert!(output.contains("Passwords are not the same, please check your passwords"));
        assert_eq!(output.matches("Confirm Password: ").count(), 2);
        assert_eq!(form.value(Field::Password), "same");
    }

    #[test]
    fn test_missing_fields_reasked() {
        let (result, _, shell, output) =
            run("alice\n\n1990-05-14\n\nx\nx\nFemale\na@b.com\n");

        assert!(result.is_ok());
        assert!(output.contains("All fields are required, please fill all the fields"));
        assert_eq!(shell.registrations(), 1);
    }

    #[test]
    fn test_unknown_gender_is_asked_again() {
        let (result, form, _, output) =
            run("alice\nother\nfemale\n1990-05-14\na@b.com\nx\nx\n");

        assert!(result.is_ok());
        assert!(output.contains("Unknown gender 'other'"));
        assert_eq!(form.value(Field::Gender), "Female");
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (result, _, shell, _) = run("alice\nFemale\n");

        assert!(matches!(result, Err(CliError::Cancelled)));
        assert_eq!(shell.registrations(), 0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let (result, form, _, _) = run("alice\r\nFemale\r\n1990-05-14\r\na@b.com\r\nx\r\nx\r\n");

        assert!(result.is_ok());
        assert_eq!(form.value(Field::DateOfBirth), "1990-05-14");
    }
}
