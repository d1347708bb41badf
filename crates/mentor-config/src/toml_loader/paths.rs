//! Where the config file lives, and seeding it on first run.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use mentor_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "mentor";
const CONFIG_FILE: &str = "config.toml";

/// `<base>/mentor/config.toml`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// Config file under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented default config to `path`.
///
/// A file that already exists is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("cannot create directory for", e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config already present, not overwriting");
            return Ok(());
        }
        Err(e) => return Err(io_err("cannot create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("cannot write", e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
