use crate::pgerror::common::Version;
use crate::pgerror::sqlstate::{ErrorClass, ErrorCode};
use crate::pgerror::sqlstate::classes::CLASSES;
use crate::pgerror::sqlstate::codes::CODES;

/// The PostgreSQL release whose errcodes.txt the catalog encodes.
/// Codes are only ever added between releases, so adding a newer
/// release is backwards compatible.
pub const CATALOG_VERSION: Version = Version::new(12, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassEntry {
    pub class: ErrorClass,
    /// Name of the constant, e.g. "CLASS_INTEGRITY_CONSTRAINT_VIOLATION"
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: ErrorCode,
    /// Name of the constant, e.g. "UNIQUE_VIOLATION"
    pub name: &'static str,
    /// The server's condition name, None for an alias of an earlier entry.
    pub condition: Option<&'static str>,
}

impl CodeEntry {
    pub fn is_alias(&self) -> bool {
        self.condition.is_none()
    }
}

/// All classes in the catalog.
pub fn classes() -> &'static [ClassEntry] {
    CLASSES
}

/// All codes in the catalog, including aliases, grouped by class.
pub fn codes() -> &'static [CodeEntry] {
    CODES
}

pub fn class_info(class: ErrorClass) -> Option<&'static ClassEntry> {
    CLASSES.iter().find(|e| e.class == class)
}

/// Returns the canonical entry for code, never an alias.
pub fn code_info(code: ErrorCode) -> Option<&'static CodeEntry> {
    CODES.iter().find(|e| e.code == code)
}

/// Find a code by its constant name, ignoring ASCII case.
pub fn lookup_name(name: &str) -> Option<ErrorCode> {
    CODES.iter().find(|e| e.name.eq_ignore_ascii_case(name)).map(|e| e.code)
}

/// Find a code by the server's condition name. A handful of condition names
/// exist in two classes (e.g. modifying_sql_data_not_permitted in 2F and 38),
/// for those the first in catalog order is returned.
pub fn lookup_condition(condition: &str) -> Option<ErrorCode> {
    CODES.iter().find(|e| e.condition == Some(condition)).map(|e| e.code)
}

/// Find a class by its constant name, ignoring ASCII case.
/// The CLASS_ prefix is optional.
pub fn lookup_class_name(name: &str) -> Option<ErrorClass> {
    CLASSES.iter()
        .find(|e| {
            e.name.eq_ignore_ascii_case(name)
                || e.name.strip_prefix("CLASS_").map_or(false, |n| n.eq_ignore_ascii_case(name))
        })
        .map(|e| e.class)
}

pub fn codes_in_class(class: ErrorClass) -> impl Iterator<Item = &'static CodeEntry> {
    CODES.iter().filter(move |e| e.code.class() == class)
}

/// Every constant name that resolves to code, canonical name first.
pub fn aliases_of(code: ErrorCode) -> impl Iterator<Item = &'static str> {
    CODES.iter().filter(move |e| e.code == code).map(|e| e.name)
}

/// True if the catalog is at least as new as the server's major version.
pub fn catalog_covers(server: Version) -> bool {
    server.major <= CATALOG_VERSION.major
}
