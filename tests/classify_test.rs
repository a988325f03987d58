mod common;

use std::error::Error;
use std::io;
use std::sync::Arc;
use std::thread;

use pgerror::*;

use crate::common::{server_error, Context};

#[test]
fn test_unique_violation_on_insert() {
    let err = server_error(ErrorCode::new("23505").unwrap());
    assert!(is_class(Some(&err), CLASS_INTEGRITY_CONSTRAINT_VIOLATION));
    assert!(is_code(Some(&err), UNIQUE_VIOLATION));
    assert!(!is_code(Some(&err), FOREIGN_KEY_VIOLATION));
    assert!(!is_class(Some(&err), CLASS_CONNECTION_EXCEPTION));
}

#[test]
fn test_serialization_failure_is_not_a_deadlock() {
    let err = server_error(SERIALIZATION_FAILURE);
    assert!(is_class(Some(&err), CLASS_TRANSACTION_ROLLBACK));
    assert!(is_code(Some(&err), SERIALIZATION_FAILURE));
    assert!(!is_code(Some(&err), DEADLOCK_DETECTED));

    let err = server_error(DEADLOCK_DETECTED);
    assert!(is_class(Some(&err), CLASS_TRANSACTION_ROLLBACK));
    assert!(!is_code(Some(&err), SERIALIZATION_FAILURE));
}

#[test]
fn test_nil_and_foreign_errors() {
    assert!(!is_class(None::<&PostgresError>, CLASS_INTEGRITY_CONSTRAINT_VIOLATION));
    assert!(!is_code(None::<&PostgresError>, UNIQUE_VIOLATION));

    let err: Box<dyn Error + Send + Sync> = Box::new(io::Error::new(io::ErrorKind::Other, "disk full"));
    for class in classes() {
        assert!(!is_class(Some(&err), class.class), "{}", class.name);
    }
    for entry in codes() {
        assert!(!is_code(Some(&err), entry.code), "{}", entry.name);
    }
}

#[test]
fn test_boxed_driver_errors() {
    let err: Box<dyn Error> = Box::new(server_error(UNDEFINED_TABLE));
    assert!(is_class(Some(&err), CLASS_SYNTAX_ERROR_OR_ACCESS_RULE_VIOLATION));
    assert!(is_code(Some(&*err), UNDEFINED_TABLE));

    let err: Box<dyn Error + Send + Sync> = Box::new(pgerror::Error::from(server_error(TOO_MANY_CONNECTIONS)));
    assert!(is_class(Some(&err), CLASS_INSUFFICIENT_RESOURCES));
    assert!(is_code(Some(&err), TOO_MANY_CONNECTIONS));
}

#[test]
fn test_wrapped_errors_are_not_unwrapped() {
    let err = Context { msg: "saving user", source: Box::new(server_error(UNIQUE_VIOLATION)) };
    let err: &(dyn Error + 'static) = &err;
    assert!(!is_code(Some(err), UNIQUE_VIOLATION));
    // the caller can walk the chain itself
    assert!(is_code(err.source(), UNIQUE_VIOLATION));
}

#[test]
fn test_literal_codes_outside_the_catalog() {
    let code = ErrorCode::new("99001").unwrap();
    assert!(!code.is_known());
    let err = server_error(code);
    assert!(is_class(Some(&err), ErrorClass::new("99").unwrap()));
    assert!(is_code(Some(&err), code));
    assert!(!is_class(Some(&err), CLASS_INTERNAL_ERROR));
}

#[test]
fn test_catalog_referential_integrity() {
    for entry in codes() {
        let info = class_info(entry.code.class()).expect("code with unknown class");
        assert_eq!(info.class, entry.code.class());
        assert!(codes_in_class(info.class).any(|e| e.code == entry.code));
    }
    assert_eq!(aliases_of(ARRAY_SUBSCRIPT_ERROR).collect::<Vec<_>>(), vec!["ARRAY_SUBSCRIPT_ERROR", "ARRAY_ELEMENT_ERROR"]);
    assert_eq!(code_info(DATETIME_VALUE_OUT_OF_RANGE).unwrap().name, "DATETIME_FIELD_OVERFLOW");
}

#[test]
fn test_query_canceled_from_many_threads() {
    let err = Arc::new(server_error(QUERY_CANCELED));
    let handles: Vec<_> = (0..8).map(|_| {
        let err = err.clone();
        thread::spawn(move || {
            (0..1000).all(|_| {
                is_class(Some(&*err), CLASS_OPERATOR_INTERVENTION)
                    && is_code(Some(&*err), QUERY_CANCELED)
                    && !is_code(Some(&*err), ADMIN_SHUTDOWN)
            })
        })
    }).collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_query_canceled_from_many_tasks() {
    let err: Arc<dyn Error + Send + Sync> = Arc::new(server_error(QUERY_CANCELED));
    let tasks: Vec<_> = (0..16).map(|_| {
        let err = err.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            (is_class(Some(&*err), CLASS_OPERATOR_INTERVENTION), is_code(Some(&*err), QUERY_CANCELED))
        })
    }).collect();
    for task in tasks {
        assert_eq!(task.await.unwrap(), (true, true));
    }
}

fn parse_code(s: &str) -> pgerror::Result<ErrorCode> {
    ErrorCode::new(s)
}

#[test]
fn test_crate_error_and_result_are_public() {
    let err: pgerror::Error = parse_code("2350").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidSqlState(_)));

    let err = pgerror::Error::from(server_error(LOCK_NOT_AVAILABLE));
    assert!(is_code(Some(&err), LOCK_NOT_AVAILABLE));
    assert!(is_class(Some(&err), CLASS_OBJECT_NOT_IN_PREREQUISITE_STATE));
}
