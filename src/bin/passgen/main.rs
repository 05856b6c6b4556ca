use std::path::PathBuf;
use std::process;

use clap::Parser;

mod prompt;

/// Generate a random password and optionally append it to a text log.
#[derive(Parser)]
struct Args {
    /// File saved passwords are appended to.
    #[arg(long)]
    log: Option<PathBuf>,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    eprintln!("Password Generator");
    let config = prompt::read_config()?;
    let mut rng = rand::thread_rng();
    let password = passgen::generate(&config, &mut rng)?;
    println!("Generated password: {}", password.as_str());

    if prompt::confirm_save()? {
        let log = passgen::PasswordLog::new(or_default_log(args.log));
        log.append(&password)?;
        eprintln!("Password saved to {}.", log.path().display());
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

fn or_default_log(log_path: Option<PathBuf>) -> PathBuf {
    match log_path {
        Some(p) => p,
        None => PathBuf::from(passgen::DEFAULT_LOG_FILE),
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("invalid settings: {0}")]
    InvalidConfig(passgen::InvalidConfigError),
    #[error("couldn't save the password: {0}")]
    Log(passgen::LogError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<passgen::InvalidConfigError> for ProgError {
    fn from(err: passgen::InvalidConfigError) -> ProgError {
        ProgError::InvalidConfig(err)
    }
}

impl From<passgen::LogError> for ProgError {
    fn from(err: passgen::LogError) -> ProgError {
        ProgError::Log(err)
    }
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
