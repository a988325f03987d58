use std::path::{Path, PathBuf};
use tracing::{info_span, info, debug};
use std::env;
use std::borrow::Cow;
use regex::{Regex, Captures};

use crate::pgerror::{Error, Result};
use crate::pgerror::config::Settings;

pub const CONFIG_FILE_NAME: &str = "pgerror.yaml";
/// Environment variable holding the full path of the config file.
pub const CONFIG_PATH_ENV: &str = "PGERROR_CONFIG";

/// Load configuration settings from config_name (usually pgerror.yaml)
/// Searching in order:
/// 1) The path in the PGERROR_CONFIG environment variable
/// 2) Current directory
/// 3) Any parent directory of the current directory, up to root
/// 4) ~/.config/pgerror/
/// 5) ~/ (as a dotfile)
/// 6) /etc/pgerror/
///
/// This replaces ${ENV_VAR[:DEFAULT]} parameters in the yaml file with values from the environment
/// variable, if set, otherwise, optionally with the given default value after the :
pub fn load_config(config_name: &str) -> Result<Settings> {
    let _span = info_span!("loading config file").entered();
    let config_path = find_config_file(config_name)?;
    info!(config_path = %config_path.to_string_lossy().into_owned(), "found config file");
    let raw_yaml = std::fs::read_to_string(&config_path)?;
    parse_config(&raw_yaml, config_path)
}

/// Parse and validate settings from yaml text, see load_config.
pub fn parse_config(raw_yaml: &str, config_path: PathBuf) -> Result<Settings> {
    let yaml_text = replace_env_vars(raw_yaml)?;
    let mut settings: Settings = serde_yaml::from_str(&yaml_text)?;
    settings.load(config_path)?;
    Ok(settings)
}

fn find_config_file(config_name: &str) -> Result<PathBuf> {
    // Use the full path given in the environment
    if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
        debug!("using config_path from {}", CONFIG_PATH_ENV);
        return Ok(PathBuf::from(path));
    }

    // Check the current directory or any of its parents for config_name
    if let Ok(start) = env::current_dir() {
        let mut dir = start.as_path();
        loop {
            debug!("checking for config file in {}", dir.to_string_lossy());
            let fp = Path::join(dir, config_name);
            if fp.exists() {
                return Ok(fp);
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
    }

    // Check  ~/.config/pgerror/{config_name}
    let mut conf_path = Path::join(Path::new(".config/pgerror"), config_name);
    // HOME is required to be set on POSIX systems, but if it's not set we'll try ~/
    let home = env::var("HOME").unwrap_or_else(|_| "~/".to_string());
    conf_path = Path::join(Path::new(&home), conf_path);
    debug!("checking for config file in {}", conf_path.to_string_lossy());
    if conf_path.exists() {
        return Ok(conf_path);
    }

    // Check ~/.{config_name}
    conf_path = Path::join(Path::new(&home), ".".to_string() + config_name);
    debug!("checking for config file in {}", conf_path.to_string_lossy());
    if conf_path.exists() {
        return Ok(conf_path);
    }

    // Check /etc/pgerror/{config_name}
    conf_path = Path::join(Path::new("/etc/pgerror"), config_name);
    debug!("checking for config file in {}", conf_path.to_string_lossy());
    if conf_path.exists() {
        return Ok(conf_path);
    }

    Err(Error::new(format!("config file {} not found", config_name)))
}

fn replace_env_vars(raw_yaml: &str) -> Result<Cow<'_, str>> {
    // We only call this function once and then never again, so don't keep the regex
    let re_var = Regex::new(r"\$\{([a-zA-Z_][0-9a-zA-Z_]*)(?::([^}]+?))?\}")?;

    let mut errors = Vec::<String>::new();

    let replaced_text = re_var.replace_all(raw_yaml, |caps: &Captures| {
        match env::var(&caps[1]) {
            Ok(val) => val,
            Err(_) => {
                if let Some(default) = caps.get(2) {
                    let s = default.as_str();
                    if let Some(msg) = s.strip_prefix('?') {
                        errors.push(msg.to_string());
                        String::new()
                    } else {
                        s.to_string()
                    }
                } else {
                    errors.push(format!("environment variable {} is required but not defined", &caps[1]));
                    String::new()
                }
            }
        }
    });

    if errors.is_empty() {
        Ok(replaced_text)
    } else {
        Err(Error::new(errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_replace_env_vars() {
        env::set_var("PGERROR_TEST_REPLACE_LEVEL", "debug");
        env::remove_var("PGERROR_TEST_REPLACE_UNSET");
        let text = "log_level: ${PGERROR_TEST_REPLACE_LEVEL}\nserver_version: \"${PGERROR_TEST_REPLACE_UNSET:12.4}\"\n";
        assert_eq!(replace_env_vars(text).unwrap(), "log_level: debug\nserver_version: \"12.4\"\n");
    }

    #[test]
    fn test_replace_env_vars_no_vars_borrows() {
        let text = "log_level: info\n";
        assert!(matches!(replace_env_vars(text).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    #[serial]
    fn test_replace_env_vars_missing() {
        env::remove_var("PGERROR_TEST_MISSING_A");
        env::remove_var("PGERROR_TEST_MISSING_B");
        let text = "a: ${PGERROR_TEST_MISSING_A}\nb: ${PGERROR_TEST_MISSING_B:?set PGERROR_TEST_MISSING_B to the server version}\n";
        let err = replace_env_vars(text).unwrap_err();
        assert_eq!(
            err.to_string(),
            "environment variable PGERROR_TEST_MISSING_A is required but not defined\nset PGERROR_TEST_MISSING_B to the server version"
        );
    }
}
