use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::pgerror::common::{Error, Result};
use crate::pgerror::sqlstate::{class_info, is_sqlstate_char, lookup_class_name};

/// The two character class of a SQLSTATE code, e.g. "23" for
/// integrity constraint violations.
///
/// ErrorClass and ErrorCode are separate types: a code has to be
/// converted explicitly with `ErrorCode::class` before it can be compared
/// against a class.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ErrorClass([u8; ErrorClass::LEN]);

/// The SQL standard groups every class into one of four categories.
#[derive(strum::Display, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Category {
    /// Class 00
    Success,
    /// Class 01
    Warning,
    /// Class 02
    NoData,
    /// Every other class
    Exception,
}

impl ErrorClass {
    pub const LEN: usize = 2;

    /// Create a class from a literal. Panics if s is not exactly two digits or
    /// upper-case letters, which fails the build when used in a const.
    pub const fn from_static(s: &'static str) -> Self {
        let b = s.as_bytes();
        assert!(b.len() == Self::LEN, "SQLSTATE class must be 2 characters");
        assert!(is_sqlstate_char(b[0]) && is_sqlstate_char(b[1]), "SQLSTATE class must be digits or upper-case letters");
        ErrorClass([b[0], b[1]])
    }

    /// Parse a class, rejecting anything that isn't two digits or upper-case letters.
    pub fn new(s: &str) -> Result<Self> {
        match s.as_bytes() {
            &[a, b] if is_sqlstate_char(a) && is_sqlstate_char(b) => Ok(ErrorClass([a, b])),
            _ => Err(Error::invalid_sql_state(s)),
        }
    }

    /// Parse either a class literal ("40") or a class constant name
    /// ("CLASS_TRANSACTION_ROLLBACK", "transaction_rollback").
    pub fn resolve(s: &str) -> Result<Self> {
        Self::new(s).or_else(|e| lookup_class_name(s).ok_or(e))
    }

    pub(crate) const fn from_prefix(a: u8, b: u8) -> Self {
        ErrorClass([a, b])
    }

    pub fn as_str(&self) -> &str {
        // Safety: every constructor only admits ASCII digits and upper-case letters
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }

    pub fn category(&self) -> Category {
        match &self.0 {
            b"00" => Category::Success,
            b"01" => Category::Warning,
            b"02" => Category::NoData,
            _ => Category::Exception,
        }
    }

    /// The human readable class name, e.g. "Integrity Constraint Violation".
    pub fn description(&self) -> Option<&'static str> {
        class_info(*self).map(|e| e.description)
    }

    /// The name of the constant for this class, e.g. "CLASS_TRANSACTION_ROLLBACK".
    pub fn name(&self) -> Option<&'static str> {
        class_info(*self).map(|e| e.name)
    }

    /// True if the class is part of the catalog.
    pub fn is_known(&self) -> bool {
        class_info(*self).is_some()
    }
}

impl Display for ErrorClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for ErrorClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorClass").field(&self.as_str()).finish()
    }
}

impl FromStr for ErrorClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Serialize for ErrorClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::resolve(&s).map_err(serde::de::Error::custom)
    }
}
