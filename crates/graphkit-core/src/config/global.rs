//! Global configuration location (~/.config/graphkit/config.toml)

use std::path::PathBuf;

use crate::error::{GraphError, Result};

const CONFIG_DIR: &str = "graphkit";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "GRAPHKIT_CONFIG_DIR";

/// Path of the global config file; the directory can be overridden with
/// `GRAPHKIT_CONFIG_DIR`
pub fn global_config_path() -> Result<PathBuf> {
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| GraphError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}
