mod config;
mod load;

pub use config::*;
pub use load::{load_config, parse_config, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
