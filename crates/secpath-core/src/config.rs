//! Configuration for secpath
//!
//! Resolution order: explicit `--config` path, then the `SECPATH_CONFIG`
//! environment variable, then `./secpath.toml`, then built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, SecpathError};

pub use types::{
    BenchConfig, SearchConfig, SecpathConfig, VerifyConfig, CONFIG_ENV_VAR, CONFIG_FILE,
};

impl SecpathConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SecpathError::not_found("config file", path.display())
            } else {
                SecpathError::Io(e)
            }
        })?;
        let config: SecpathConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SecpathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load the effective configuration.
    ///
    /// An explicit path must exist; the environment variable and working
    /// directory lookups fall back to defaults when nothing is found.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "config_explicit");
            return Self::load(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            tracing::debug!(path = %path.display(), "config_from_env");
            return Self::load(&path);
        }

        let local = cwd.join(CONFIG_FILE);
        if local.is_file() {
            tracing::debug!(path = %local.display(), "config_local");
            return Self::load(&local);
        }

        Ok(Self::default())
    }

    /// Reject settings the harnesses cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.verify.engines.is_empty() {
            bail_invalid!("verify.engines", "[] (need at least one engine)");
        }
        if self.bench.min_weight > self.bench.max_weight {
            bail_invalid!(
                "bench weight range",
                format!("{}..={}", self.bench.min_weight, self.bench.max_weight)
            );
        }
        if self.bench.repetitions == 0 {
            bail_invalid!("bench.repetitions", 0);
        }
        if self.bench.sizes.iter().any(|&n| n < 2) {
            bail_invalid!("bench.sizes", format!("{:?} (each size must be >= 2)", self.bench.sizes));
        }
        Ok(())
    }
}
