use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod charset;
pub mod generation;

pub use charset::CharacterClass;
pub use generation::{generate, GenerationConfig};

/// The file passwords are appended to when no other path is given.
pub static DEFAULT_LOG_FILE: &str = "passwords.txt";

/// A generated password.
///
/// The `Debug` representation is opaque so the password can't leak through
/// incidental logging; display it deliberately via [`Password::as_str`].
#[derive(Clone, Eq, PartialEq)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Password {
    fn from(s: String) -> Password {
        Password(s)
    }
}

/// A plain-text log of generated passwords, one per line.
pub struct PasswordLog {
    path: PathBuf,
}

impl PasswordLog {
    pub fn new(path: PathBuf) -> PasswordLog {
        PasswordLog { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `password` and a trailing newline to the log, creating the
    /// file first if it doesn't exist. Existing lines are never touched.
    pub fn append(&self, password: &Password) -> Result<(), LogError> {
        let mut file = File::options()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(LogError::Io)?;
        file.write_all(password.0.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(LogError::Io)?;
        Ok(())
    }
}

/// An error while appending to the password log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(io::Error),
}

/// The requested password composition can't be satisfied.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct InvalidConfigError(InvalidConfigRepr);

impl From<InvalidConfigRepr> for InvalidConfigError {
    fn from(err: InvalidConfigRepr) -> InvalidConfigError {
        InvalidConfigError(err)
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum InvalidConfigRepr {
    #[error("the password length must be at least 1")]
    ZeroLength,
    #[error(
        "a password of length {length} cannot contain a character from each \
         of the {required} enabled character classes"
    )]
    LengthTooShort { length: usize, required: usize },
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn append_creates_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = PasswordLog::new(dir.path().join("passwords.txt"));
        log.append(&Password::from("s3cret!".to_string())).unwrap();
        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "s3cret!\n");
    }

    #[test]
    fn append_preserves_earlier_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        fs::write(&path, "older\n").unwrap();
        let log = PasswordLog::new(path);
        log.append(&Password::from("first".to_string())).unwrap();
        log.append(&Password::from("second".to_string())).unwrap();
        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "older\nfirst\nsecond\n");
    }

    #[test]
    fn append_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        // The parent of this path doesn't exist, so the open must fail.
        let log = PasswordLog::new(dir.path().join("missing").join("passwords.txt"));
        let err = log.append(&Password::from("pw".to_string()));
        assert!(matches!(err, Err(LogError::Io(_))));
    }

    #[test]
    fn password_debug_is_opaque() {
        let password = Password::from("hunter2".to_string());
        assert!(!format!("{:?}", password).contains("hunter2"));
    }
}
