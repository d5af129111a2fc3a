//! Engine configuration for graphkit
//!
//! Looked up in order: an explicit `--config` path, `./graphkit.toml`, then
//! the global config file. The first file found wins; with none, defaults
//! apply. CLI flags override whatever was loaded.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::bail_usage;
use crate::error::{GraphError, Result};
use crate::graph::Limits;

pub use global::{global_config_path, CONFIG_DIR_ENV_VAR};
pub use types::{AlgorithmConfig, AllPairsAlgorithm, EngineConfig, LimitsConfig, ShortestPathAlgorithm};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "graphkit.toml";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!("failed to read config from {}: {}", path.display(), e))
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Find and load the effective configuration.
    ///
    /// An explicit path must exist; the implicit locations are optional.
    /// Returns the config and the file it came from, if any.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail_usage!(format!("config file not found: {}", path.display()));
            }
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, Some(local)));
        }

        match global_config_path() {
            Ok(global) if global.is_file() => Ok((Self::load(&global)?, Some(global))),
            Ok(_) => Ok((Self::default(), None)),
            Err(e) => {
                tracing::debug!(error = %e, "no global config location");
                Ok((Self::default(), None))
            }
        }
    }

    /// Execution limits described by the `[limits]` table
    pub fn to_limits(&self) -> Limits {
        Limits {
            max_steps: self.limits.max_steps,
            deadline: self.limits.deadline_ms.map(Duration::from_millis),
            interrupt: None,
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))
    }
}
