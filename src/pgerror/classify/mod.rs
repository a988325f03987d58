//! Predicates that test an arbitrary error against the SQLSTATE catalog.

mod coder;
mod severity;
mod postgres_error;
mod group;

pub use self::coder::{ErrorCoder, is_class, is_code};
pub use self::severity::ErrorSeverity;
pub use self::postgres_error::PostgresError;
pub use self::group::ErrorGroup;
