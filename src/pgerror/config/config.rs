use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, warn, Level};

use crate::pgerror::classify::{ErrorCoder, ErrorGroup};
use crate::pgerror::common::{Error, Result, Version};
use crate::pgerror::sqlstate::{catalog_covers, CATALOG_VERSION};

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// config_path is the path of the loaded config file
    #[serde(skip)]
    pub config_path: PathBuf,
    /// log_level is the most verbose level init_tracing will write: trace, debug, info, warn or error. Default info.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// server_version of the PostgreSQL servers the errors come from, e.g. "12.4" (quote it, or YAML reads a float).
    /// If it's newer than the catalog a warning is logged, the server may report codes the catalog doesn't name.
    #[serde(default)]
    pub server_version: Option<String>,
    /// groups are named sets of classes and codes to classify errors by, e.g.
    /// transient: { classes: ["40", "08"], codes: ["lock_not_available"] }
    #[serde(default)]
    pub groups: BTreeMap<String, ErrorGroup>,
    #[serde(skip)]
    max_level: Option<Level>,
    #[serde(skip)]
    version: Option<Version>,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for Settings {
    fn default() -> Self {
        Settings {
            config_path: PathBuf::new(),
            log_level: default_log_level(),
            server_version: None,
            groups: BTreeMap::new(),
            max_level: Some(Level::INFO),
            version: None,
        }
    }
}

impl Settings {
    pub(crate) fn load(&mut self, path: PathBuf) -> Result<()> {
        self.config_path = path;

        let max_level = Level::from_str(&self.log_level)
            .map_err(|_| Error::new(format!("invalid log_level {:?}, expected one of trace, debug, info, warn, error", self.log_level)))?;
        self.max_level = Some(max_level);

        if let Some(s) = &self.server_version {
            let version = Version::from_str(s)
                .map_err(|e| Error::new(format!("invalid server_version {:?}: {}", s, e)))?;
            if !catalog_covers(version) {
                warn!(server_version = %version, catalog_version = %CATALOG_VERSION, "server is newer than the error code catalog, some codes will have no name");
            }
            self.version = Some(version);
        }

        for (name, group) in &self.groups {
            if group.is_empty() {
                return Err(Error::new(format!("error group {} must list at least one class or code", name)));
            }
            for member in group.unknown_members() {
                warn!(group = %name, %member, "error group member is not in the catalog, it will be compared literally");
            }
            debug!(group = %name, classes = group.classes.len(), codes = group.codes.len(), "loaded error group");
        }
        Ok(())
    }

    pub fn max_level(&self) -> Level {
        self.max_level.unwrap_or(Level::INFO)
    }

    pub fn server_version(&self) -> Option<Version> {
        self.version
    }

    pub fn group(&self, name: &str) -> Option<&ErrorGroup> {
        self.groups.get(name)
    }

    /// Names of the groups err belongs to, sorted by name.
    pub fn matching_groups<E: ErrorCoder + ?Sized>(&self, err: Option<&E>) -> Vec<&str> {
        self.groups.iter()
            .filter(|(_, group)| group.matches(err))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
