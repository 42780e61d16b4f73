mod error;
mod paths;
mod prompt;
mod shell;

use std::env;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::process::ExitCode;

use log::error;
use signup_lib::RegistrationForm;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;
use crate::prompt::Session;
use crate::shell::AppShell;

const USAGE: &str = "\
Usage: signup [RECORD.json]

Without arguments, asks for each registration field on the terminal.
With a JSON file holding a camelCase record, validates it once.";

fn init_logging() -> Result<(), CliError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}

fn run_interactive() -> Result<bool, CliError> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.run(&mut RegistrationForm::new(), &mut AppShell::new())?;
    Ok(true)
}

fn run_file(path: &Path) -> Result<bool, CliError> {
    let record = shell::load_record(path)?;
    shell::submit_record(record, &mut AppShell::new(), &mut io::stdout(), &mut io::stderr())
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.as_slice() {
        [] => run_interactive(),
        [flag] if flag == "-h" || flag == "--help" => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        [path] => run_file(Path::new(path)),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(CliError::Cancelled) => {
            eprintln!("\nRegistration cancelled");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
