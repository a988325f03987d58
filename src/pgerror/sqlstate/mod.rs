//! SQLSTATE classes and codes as reported by PostgreSQL.
//!
//! See https://www.postgresql.org/docs/12/errcodes-appendix.html
//! and https://github.com/postgres/postgres/blob/REL_12_STABLE/src/backend/utils/errcodes.txt

#[macro_use]
mod macros;
mod error_class;
mod error_code;
mod catalog;
mod classes;
mod codes;

pub use self::error_class::{ErrorClass, Category};
pub use self::error_code::ErrorCode;
pub use self::catalog::*;
pub use self::classes::*;
pub use self::codes::*;

/// SQLSTATE values are made of digits and upper-case ASCII letters only.
pub(crate) const fn is_sqlstate_char(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_uppercase()
}
