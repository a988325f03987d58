use std::fmt::Display;
use std::num::ParseIntError;
use std::{fmt, io, result};

use crate::pgerror::classify::{ErrorCoder, PostgresError};
use crate::pgerror::sqlstate::ErrorCode;

#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    err: Box<ErrorKind>, // use a Box to keep the Result type smaller
}

#[derive(Debug)]
pub enum ErrorKind {
    StringError(String),
    /// A value that is not a well-formed SQLSTATE class or code.
    InvalidSqlState(String),
    IOError(io::Error),
    YAMLError(serde_yaml::Error),
    RegexError(regex::Error),
    ParseIntError(ParseIntError),
    /// An error reported by the server, carried through unchanged.
    PostgresError(PostgresError),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub fn new<S: ToString>(s: S) -> Self {
        Error {
            err: Box::new(ErrorKind::StringError(s.to_string())),
        }
    }

    pub fn invalid_sql_state<S: ToString>(s: S) -> Self {
        Error {
            err: Box::new(ErrorKind::InvalidSqlState(s.to_string())),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.err
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error {
            err: Box::new(ErrorKind::StringError(String::from(err))),
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error {
            err: Box::new(ErrorKind::StringError(err)),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error {
            err: Box::new(ErrorKind::IOError(err)),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error {
            err: Box::new(ErrorKind::YAMLError(err)),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error {
            err: Box::new(ErrorKind::RegexError(err)),
        }
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Error {
            err: Box::new(ErrorKind::ParseIntError(err)),
        }
    }
}

impl From<PostgresError> for Error {
    fn from(err: PostgresError) -> Self {
        Error {
            err: Box::new(ErrorKind::PostgresError(err)),
        }
    }
}

impl ErrorCoder for Error {
    fn error_code(&self) -> Option<ErrorCode> {
        match self.kind() {
            ErrorKind::PostgresError(e) => e.error_code(),
            _ => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::IOError(e) => Some(e),
            ErrorKind::YAMLError(e) => Some(e),
            ErrorKind::RegexError(e) => Some(e),
            ErrorKind::ParseIntError(e) => Some(e),
            ErrorKind::PostgresError(e) => Some(e),
            ErrorKind::StringError(_) | ErrorKind::InvalidSqlState(_) => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err, f)
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::StringError(s) => f.write_str(s),
            ErrorKind::InvalidSqlState(s) => write!(f, "invalid SQLSTATE value {:?}", s),
            ErrorKind::IOError(e) => Display::fmt(e, f),
            ErrorKind::YAMLError(e) => Display::fmt(e, f),
            ErrorKind::RegexError(e) => Display::fmt(e, f),
            ErrorKind::ParseIntError(e) => Display::fmt(e, f),
            ErrorKind::PostgresError(e) => Display::fmt(e, f),
        }
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl Eq for ErrorKind {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pgerror::classify::ErrorSeverity;
    use crate::pgerror::sqlstate::{CLASS_INTEGRITY_CONSTRAINT_VIOLATION, UNIQUE_VIOLATION};

    #[test]
    fn test_wrapped_postgres_error_keeps_code() {
        let err = Error::from(PostgresError::new(ErrorSeverity::Error, UNIQUE_VIOLATION, "duplicate key"));
        assert_eq!(err.error_code(), Some(UNIQUE_VIOLATION));
        assert_eq!(err.error_class(), Some(CLASS_INTEGRITY_CONSTRAINT_VIOLATION));
        assert_eq!(err.to_string(), "ERROR: duplicate key (SQLSTATE 23505)");
    }

    #[test]
    fn test_other_kinds_have_no_code() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(err.error_code(), None);
        assert_eq!(Error::new("plain").error_code(), None);
        assert_eq!(Error::invalid_sql_state("2350").error_code(), None);
    }

    #[test]
    fn test_kind_equality_ignores_payload() {
        assert_eq!(Error::new("a"), Error::new("b"));
        assert_ne!(Error::new("a"), Error::invalid_sql_state("a"));
    }

    #[test]
    fn test_display_invalid_sql_state() {
        assert_eq!(Error::invalid_sql_state("2350").to_string(), "invalid SQLSTATE value \"2350\"");
    }
}
