use std::fmt;
use std::fmt::{Display, Formatter};

use crate::pgerror::classify::{ErrorCoder, ErrorSeverity};
use crate::pgerror::sqlstate::ErrorCode;

/// An error reported by the server, with the fields of an ErrorResponse
/// message that are useful for deciding what to do about it.
/// Decoding the message itself is up to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresError {
    pub code: ErrorCode,
    pub severity: ErrorSeverity,
    message: String,
    detail: Option<String>,
    hint: Option<String>,
    schema_name: Option<String>,
    table_name: Option<String>,
    column_name: Option<String>,
    constraint_name: Option<String>,
    routine: Option<String>,
}

impl PostgresError {
    pub fn new<S: Into<String>>(severity: ErrorSeverity, code: ErrorCode, message: S) -> Self {
        PostgresError {
            code,
            severity,
            message: message.into(),
            detail: None,
            hint: None,
            schema_name: None,
            table_name: None,
            column_name: None,
            constraint_name: None,
            routine: None,
        }
    }

    pub fn with_detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_hint<S: Into<String>>(mut self, hint: S) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_schema_name<S: Into<String>>(mut self, schema_name: S) -> Self {
        self.schema_name = Some(schema_name.into());
        self
    }

    pub fn with_table_name<S: Into<String>>(mut self, table_name: S) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn with_column_name<S: Into<String>>(mut self, column_name: S) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    pub fn with_constraint_name<S: Into<String>>(mut self, constraint_name: S) -> Self {
        self.constraint_name = Some(constraint_name.into());
        self
    }

    pub fn with_routine<S: Into<String>>(mut self, routine: S) -> Self {
        self.routine = Some(routine.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn column_name(&self) -> Option<&str> {
        self.column_name.as_deref()
    }

    pub fn constraint_name(&self) -> Option<&str> {
        self.constraint_name.as_deref()
    }

    pub fn routine(&self) -> Option<&str> {
        self.routine.as_deref()
    }
}

impl ErrorCoder for PostgresError {
    fn error_code(&self) -> Option<ErrorCode> {
        Some(self.code)
    }
}

impl Display for PostgresError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (SQLSTATE {})", self.severity, self.message, self.code)
    }
}

impl std::error::Error for PostgresError {}
