use std::error::Error;
use std::fmt;

use pgerror::{ErrorCode, ErrorSeverity, PostgresError};

/// An error as a driver would return it after the server rejected a statement.
pub fn server_error(code: ErrorCode) -> PostgresError {
    PostgresError::new(ErrorSeverity::Error, code, "statement failed")
}

/// Wraps another error as its source(), like an application error that
/// adds context to a driver error.
#[derive(Debug)]
pub struct Context {
    pub msg: &'static str,
    pub source: Box<dyn Error + Send + Sync>,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.msg)
    }
}

impl Error for Context {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}
