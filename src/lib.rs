mod pgerror;
#[cfg(test)]
mod tests;

pub use crate::pgerror::*;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::pgerror::config::{Settings, load_config, CONFIG_FILE_NAME};


/// Install a global tracing subscriber writing events up to max_level to stdout.
pub fn init_tracing(max_level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        // all spans/events with a level higher than max_level
        // will be written to stdout.
        .with_max_level(max_level)
        // completes the builder.
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::new(format!("setting default subscriber failed: {}", e)))
}

/// Load the configuration settings from pgerror.yaml
/// See pgerror::config::load_config for more info.
pub fn init_settings() -> Result<&'static Settings> {
    let settings = load_config(CONFIG_FILE_NAME)?;
    Ok(Box::leak(Box::new(settings)))
}
