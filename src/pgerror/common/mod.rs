mod errors;
mod version;

pub use self::errors::{Error, ErrorKind, Result};
pub use self::version::Version;
