use std::error::Error as StdError;

use crate::pgerror::common::Error;
use crate::pgerror::classify::PostgresError;
use crate::pgerror::sqlstate::{ErrorClass, ErrorCode};

/// Implemented by errors that may carry a SQLSTATE code.
///
/// Driver error types implement this so they can be classified without the
/// caller knowing their concrete type. Returning None means the error did not
/// come from the server (or its code was malformed) and it matches no class
/// or code.
///
/// Behind `dyn Error` only the types this crate knows are recognized:
/// `PostgresError`, the crate `Error`, and the tokio-postgres errors when that
/// feature is enabled. Any other implementor is found when passed as its own
/// type, but once boxed as `dyn Error` it narrows to None.
pub trait ErrorCoder {
    fn error_code(&self) -> Option<ErrorCode>;

    /// The class of the error. Defaults to the class of error_code(), types that
    /// store the class separately can return it directly.
    fn error_class(&self) -> Option<ErrorClass> {
        self.error_code().map(|code| code.class())
    }

    fn has_class(&self, class: ErrorClass) -> bool {
        self.error_class() == Some(class)
    }

    fn has_code(&self, code: ErrorCode) -> bool {
        self.error_code() == Some(code)
    }
}

/// Reports whether err carries a code in the given class.
/// None, and errors without a code, are never in any class.
pub fn is_class<E: ErrorCoder + ?Sized>(err: Option<&E>, class: ErrorClass) -> bool {
    err.map_or(false, |e| e.has_class(class))
}

/// Reports whether err carries exactly the given code.
/// None, and errors without a code, never match.
pub fn is_code<E: ErrorCoder + ?Sized>(err: Option<&E>, code: ErrorCode) -> bool {
    err.map_or(false, |e| e.has_code(code))
}

impl<T: ErrorCoder + ?Sized> ErrorCoder for &T {
    fn error_code(&self) -> Option<ErrorCode> {
        (**self).error_code()
    }

    fn error_class(&self) -> Option<ErrorClass> {
        (**self).error_class()
    }
}

impl<T: ErrorCoder + ?Sized> ErrorCoder for Box<T> {
    fn error_code(&self) -> Option<ErrorCode> {
        (**self).error_code()
    }

    fn error_class(&self) -> Option<ErrorClass> {
        (**self).error_class()
    }
}

impl ErrorCoder for dyn StdError + 'static {
    fn error_code(&self) -> Option<ErrorCode> {
        narrow(self).and_then(|e| e.error_code())
    }

    fn error_class(&self) -> Option<ErrorClass> {
        narrow(self).and_then(|e| e.error_class())
    }
}

impl ErrorCoder for dyn StdError + Send + Sync + 'static {
    fn error_code(&self) -> Option<ErrorCode> {
        narrow(self).and_then(|e| e.error_code())
    }

    fn error_class(&self) -> Option<ErrorClass> {
        narrow(self).and_then(|e| e.error_class())
    }
}

/// Narrow an opaque error to one of the error types known to carry a code.
/// Only err itself is inspected, not its source() chain.
fn narrow<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn ErrorCoder> {
    if let Some(e) = err.downcast_ref::<PostgresError>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<Error>() {
        return Some(e);
    }
    #[cfg(feature = "tokio-postgres")]
    {
        if let Some(e) = err.downcast_ref::<tokio_postgres::Error>() {
            return Some(e);
        }
        if let Some(e) = err.downcast_ref::<tokio_postgres::error::DbError>() {
            return Some(e);
        }
    }
    None
}

#[cfg(feature = "tokio-postgres")]
impl ErrorCoder for tokio_postgres::error::SqlState {
    fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::new(self.code()).ok()
    }
}

#[cfg(feature = "tokio-postgres")]
impl ErrorCoder for tokio_postgres::error::DbError {
    fn error_code(&self) -> Option<ErrorCode> {
        self.code().error_code()
    }
}

#[cfg(feature = "tokio-postgres")]
impl ErrorCoder for tokio_postgres::Error {
    fn error_code(&self) -> Option<ErrorCode> {
        self.code().and_then(|state| state.error_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;

    use crate::pgerror::classify::ErrorSeverity;
    use crate::pgerror::sqlstate::*;

    /// A driver error that only keeps the class, like some drivers do for
    /// connection failures.
    #[derive(Debug)]
    struct ClassOnly(ErrorClass);

    impl ErrorCoder for ClassOnly {
        fn error_code(&self) -> Option<ErrorCode> {
            None
        }

        fn error_class(&self) -> Option<ErrorClass> {
            Some(self.0)
        }
    }

    #[derive(Debug)]
    struct Unrelated;

    impl fmt::Display for Unrelated {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("unrelated")
        }
    }

    impl StdError for Unrelated {}

    fn pg(code: ErrorCode) -> PostgresError {
        PostgresError::new(ErrorSeverity::Error, code, "boom")
    }

    #[test]
    fn test_none_never_matches() {
        assert!(!is_class(None::<&PostgresError>, CLASS_INTEGRITY_CONSTRAINT_VIOLATION));
        assert!(!is_code(None::<&PostgresError>, UNIQUE_VIOLATION));
        assert!(!is_class(None::<&(dyn StdError + 'static)>, CLASS_INTEGRITY_CONSTRAINT_VIOLATION));
        assert!(!is_code(None::<&(dyn StdError + 'static)>, UNIQUE_VIOLATION));
    }

    #[test]
    fn test_unique_violation() {
        let err = pg(UNIQUE_VIOLATION);
        assert!(is_code(Some(&err), UNIQUE_VIOLATION));
        assert!(!is_code(Some(&err), FOREIGN_KEY_VIOLATION));
        assert!(is_class(Some(&err), CLASS_INTEGRITY_CONSTRAINT_VIOLATION));
        assert!(!is_class(Some(&err), CLASS_CONNECTION_EXCEPTION));
    }

    #[test]
    fn test_code_match_is_exact() {
        let err = pg(INTEGRITY_CONSTRAINT_VIOLATION);
        assert!(!is_code(Some(&err), UNIQUE_VIOLATION));
        let err = pg(UNIQUE_VIOLATION);
        assert!(!is_code(Some(&err), INTEGRITY_CONSTRAINT_VIOLATION));
    }

    #[test]
    fn test_class_not_in_catalog_is_compared_literally() {
        let err = pg(ErrorCode::new("99001").unwrap());
        assert!(is_class(Some(&err), ErrorClass::new("99").unwrap()));
        assert!(!is_class(Some(&err), ErrorClass::new("98").unwrap()));
    }

    #[test]
    fn test_explicit_class_overrides_prefix() {
        let err = ClassOnly(CLASS_CONNECTION_EXCEPTION);
        assert!(is_class(Some(&err), CLASS_CONNECTION_EXCEPTION));
        assert!(!is_code(Some(&err), CONNECTION_EXCEPTION));
    }

    #[test]
    fn test_narrow_dyn_error() {
        let err: Box<dyn StdError + Send + Sync> = Box::new(pg(SERIALIZATION_FAILURE));
        assert!(is_class(Some(&*err), CLASS_TRANSACTION_ROLLBACK));
        assert!(is_code(Some(&err), SERIALIZATION_FAILURE));
        assert!(!is_code(Some(&err), DEADLOCK_DETECTED));

        let err: Box<dyn StdError> = Box::new(Error::from(pg(QUERY_CANCELED)));
        assert!(is_class(Some(&*err), CLASS_OPERATOR_INTERVENTION));
        assert!(is_code(Some(&*err), QUERY_CANCELED));
    }

    #[test]
    fn test_unrelated_errors_never_match() {
        let errs: Vec<Box<dyn StdError + Send + Sync>> = vec![
            Box::new(Unrelated),
            Box::new(io::Error::new(io::ErrorKind::Other, "23505")),
            Box::new(Error::new("23505")),
            "40001".parse::<u8>().unwrap_err().into(),
        ];
        for err in &errs {
            for class in classes() {
                assert!(!is_class(Some(&**err), class.class), "{} matched {}", err, class.name);
            }
            for code in codes() {
                assert!(!is_code(Some(&**err), code.code), "{} matched {}", err, code.name);
            }
        }
    }

    #[test]
    fn test_source_chain_is_not_walked() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, pg(UNIQUE_VIOLATION)));
        assert!(!is_code(Some(&err), UNIQUE_VIOLATION));
    }

    #[test]
    fn test_predicates_are_repeatable() {
        let err = pg(DEADLOCK_DETECTED);
        let first = (is_class(Some(&err), CLASS_TRANSACTION_ROLLBACK), is_code(Some(&err), DEADLOCK_DETECTED));
        for _ in 0..100 {
            assert_eq!((is_class(Some(&err), CLASS_TRANSACTION_ROLLBACK), is_code(Some(&err), DEADLOCK_DETECTED)), first);
        }
        assert_eq!(first, (true, true));
    }

    /// A driver error type defined outside the crate.
    #[derive(Debug)]
    struct DriverError(ErrorCode);

    impl fmt::Display for DriverError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "driver error {}", self.0)
        }
    }

    impl StdError for DriverError {}

    impl ErrorCoder for DriverError {
        fn error_code(&self) -> Option<ErrorCode> {
            Some(self.0)
        }
    }

    #[test]
    fn test_foreign_coder_is_not_narrowed_from_dyn_error() {
        let err = DriverError(QUERY_CANCELED);
        assert!(is_code(Some(&err), QUERY_CANCELED));
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(DriverError(QUERY_CANCELED));
        assert!(!is_code(Some(&boxed), QUERY_CANCELED));
        assert!(!is_class(Some(&boxed), CLASS_OPERATOR_INTERVENTION));
    }

    #[cfg(feature = "tokio-postgres")]
    #[test]
    fn test_tokio_postgres_sql_state() {
        use tokio_postgres::error::SqlState;

        assert_eq!(SqlState::UNIQUE_VIOLATION.error_code(), Some(UNIQUE_VIOLATION));
        assert!(is_class(Some(&SqlState::T_R_SERIALIZATION_FAILURE), CLASS_TRANSACTION_ROLLBACK));
        assert!(is_code(Some(&SqlState::from_code("40P01")), DEADLOCK_DETECTED));
        // codes newer than the catalog are still compared literally
        assert_eq!(SqlState::from_code("99123").error_code(), Some(ErrorCode::new("99123").unwrap()));
        // a malformed code from the wire has no code at all
        assert_eq!(SqlState::from_code("bad").error_code(), None);
    }
}
