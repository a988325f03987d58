use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::pgerror::common::{Error, Result};
use crate::pgerror::sqlstate::{code_info, is_sqlstate_char, lookup_condition, lookup_name, ErrorClass};

/// A five character SQLSTATE code, e.g. "23505" for unique_violation.
/// The first two characters are the code's class.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ErrorCode([u8; ErrorCode::LEN]);

impl ErrorCode {
    pub const LEN: usize = 5;

    /// Create a code from a literal. Panics if s is not exactly five digits or
    /// upper-case letters, which fails the build when used in a const.
    pub const fn from_static(s: &'static str) -> Self {
        let b = s.as_bytes();
        assert!(b.len() == Self::LEN, "SQLSTATE code must be 5 characters");
        let mut i = 0;
        while i < Self::LEN {
            assert!(is_sqlstate_char(b[i]), "SQLSTATE code must be digits or upper-case letters");
            i += 1;
        }
        ErrorCode([b[0], b[1], b[2], b[3], b[4]])
    }

    /// Parse a code, rejecting anything that isn't five digits or upper-case letters.
    /// A code does not have to be in the catalog, newer servers report codes we don't know.
    pub fn new(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        if b.len() != Self::LEN || !b.iter().all(|&c| is_sqlstate_char(c)) {
            return Err(Error::invalid_sql_state(s));
        }
        let mut code = [0u8; Self::LEN];
        code.copy_from_slice(b);
        Ok(ErrorCode(code))
    }

    /// Parse a code literal ("40001"), a constant name ("SERIALIZATION_FAILURE",
    /// case-insensitive) or a condition name ("serialization_failure").
    pub fn resolve(s: &str) -> Result<Self> {
        Self::new(s).or_else(|e| lookup_name(s).or_else(|| lookup_condition(s)).ok_or(e))
    }

    pub fn as_str(&self) -> &str {
        // Safety: every constructor only admits ASCII digits and upper-case letters
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }

    /// The class of the code, its first two characters.
    pub const fn class(&self) -> ErrorClass {
        ErrorClass::from_prefix(self.0[0], self.0[1])
    }

    /// The last three characters. "000" is the general code of its class.
    pub fn subclass(&self) -> &str {
        &self.as_str()[ErrorClass::LEN..]
    }

    /// The condition name the server uses for this code, e.g. "unique_violation".
    pub fn condition_name(&self) -> Option<&'static str> {
        code_info(*self).and_then(|e| e.condition)
    }

    /// The name of the canonical constant for this code, e.g. "UNIQUE_VIOLATION".
    pub fn name(&self) -> Option<&'static str> {
        code_info(*self).map(|e| e.name)
    }

    /// True if the code is part of the catalog.
    pub fn is_known(&self) -> bool {
        code_info(*self).is_some()
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorCode").field(&self.as_str()).finish()
    }
}

impl FromStr for ErrorCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::resolve(&s).map_err(serde::de::Error::custom)
    }
}
