pub mod common;
pub mod config;
pub mod sqlstate;
pub mod classify;

pub use self::common::{Error, ErrorKind, Result, Version};
pub use self::sqlstate::*;
pub use self::classify::*;
