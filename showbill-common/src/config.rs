//! Configuration loading and database path resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Database path resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_database_path(cli_arg: Option<&str>, env_var_name: &str) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(db_path) = config.get("database_path").and_then(|v| v.as_str()) {
                    return Ok(PathBuf::from(db_path));
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    Ok(default_database_path())
}

/// Locate the configuration file for the platform.
///
/// Looks in the user config directory first (`~/.config/showbill/config.toml`
/// on Linux), then `/etc/showbill/config.toml` on Unix systems.
fn find_config_file() -> Result<PathBuf> {
    if let Some(user_config) = dirs::config_dir().map(|d| d.join("showbill").join("config.toml")) {
        if user_config.exists() {
            return Ok(user_config);
        }
    }

    #[cfg(unix)]
    {
        let system_config = PathBuf::from("/etc/showbill/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// Default database location: `<data dir>/showbill/showbill.db`, falling back
/// to the working directory when the platform data dir cannot be determined.
fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("showbill").join("showbill.db"))
        .unwrap_or_else(|| PathBuf::from("showbill.db"))
}
