use std::fmt;
use std::fmt::{Display, Formatter};

use strum::EnumString;

/// Severity of a server error or notice, as sent in the 'V' field of an
/// ErrorResponse. Ordered from least to most severe.
#[derive(EnumString, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum ErrorSeverity {
    Debug,
    Log,
    Info,
    Notice,
    Warning,
    Error,
    Fatal,
    Panic,
}

impl ErrorSeverity {
    pub fn as_str(&self) -> &'static str {
        match *self {
            ErrorSeverity::Panic => "PANIC",
            ErrorSeverity::Fatal => "FATAL",
            ErrorSeverity::Error => "ERROR",
            ErrorSeverity::Warning => "WARNING",
            ErrorSeverity::Notice => "NOTICE",
            ErrorSeverity::Debug => "DEBUG",
            ErrorSeverity::Info => "INFO",
            ErrorSeverity::Log => "LOG",
        }
    }

    /// FATAL and PANIC end the session, the connection can't be reused.
    pub fn ends_session(&self) -> bool {
        *self >= ErrorSeverity::Fatal
    }
}

impl Display for ErrorSeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
