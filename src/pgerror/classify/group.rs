use serde::{Deserialize, Serialize};

use crate::pgerror::classify::ErrorCoder;
use crate::pgerror::sqlstate::{ErrorClass, ErrorCode};

/// A named set of classes and codes, e.g. the errors an application
/// considers transient. An error belongs to the group if it is in any of
/// the classes or has any of the codes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ErrorGroup {
    #[serde(default)]
    pub classes: Vec<ErrorClass>,
    #[serde(default)]
    pub codes: Vec<ErrorCode>,
}

impl ErrorGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: ErrorClass) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.codes.push(code);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.codes.is_empty()
    }

    /// True if err is in one of the group's classes or has one of its codes.
    pub fn matches<E: ErrorCoder + ?Sized>(&self, err: Option<&E>) -> bool {
        let err = match err {
            Some(err) => err,
            None => return false,
        };
        if !self.classes.is_empty() {
            if let Some(class) = err.error_class() {
                if self.classes.contains(&class) {
                    return true;
                }
            }
        }
        match err.error_code() {
            Some(code) => self.codes.contains(&code),
            None => false,
        }
    }

    /// True if the group covers code, either directly or by its class.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.codes.contains(&code) || self.classes.contains(&code.class())
    }

    /// Members that are well-formed but not in the catalog.
    pub fn unknown_members(&self) -> Vec<String> {
        let classes = self.classes.iter()
            .filter(|c| !c.is_known())
            .map(|c| c.to_string());
        let codes = self.codes.iter()
            .filter(|c| !c.is_known())
            .map(|c| c.to_string());
        classes.chain(codes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pgerror::classify::{ErrorSeverity, PostgresError};
    use crate::pgerror::sqlstate::*;

    fn transient() -> ErrorGroup {
        ErrorGroup::new()
            .with_class(CLASS_TRANSACTION_ROLLBACK)
            .with_class(CLASS_CONNECTION_EXCEPTION)
            .with_code(LOCK_NOT_AVAILABLE)
    }

    fn pg(code: ErrorCode) -> PostgresError {
        PostgresError::new(ErrorSeverity::Error, code, "boom")
    }

    #[test]
    fn test_group_matches_by_class_or_code() {
        let group = transient();
        assert!(group.matches(Some(&pg(SERIALIZATION_FAILURE))));
        assert!(group.matches(Some(&pg(CONNECTION_FAILURE))));
        assert!(group.matches(Some(&pg(LOCK_NOT_AVAILABLE))));
        assert!(!group.matches(Some(&pg(OBJECT_IN_USE))));
        assert!(!group.matches(Some(&pg(UNIQUE_VIOLATION))));
        assert!(!group.matches(None::<&PostgresError>));
    }

    #[test]
    fn test_group_contains() {
        let group = transient();
        assert!(group.contains(DEADLOCK_DETECTED));
        assert!(group.contains(LOCK_NOT_AVAILABLE));
        assert!(!group.contains(QUERY_CANCELED));
    }

    #[test]
    fn test_empty_group() {
        assert!(ErrorGroup::new().is_empty());
        assert!(!ErrorGroup::new().matches(Some(&pg(UNIQUE_VIOLATION))));
        assert!(!transient().is_empty());
    }

    #[test]
    fn test_unknown_members() {
        let group = transient()
            .with_class(ErrorClass::new("99").unwrap())
            .with_code(ErrorCode::new("40P99").unwrap());
        assert_eq!(group.unknown_members(), vec!["99".to_string(), "40P99".to_string()]);
        assert!(transient().unknown_members().is_empty());
    }
}
