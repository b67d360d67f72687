//! Configuration service implementation.
//!
//! Loads the root configuration from the configuration file
//! (~/.config/country-facts/config.toml). A missing file yields defaults; a
//! malformed file is reported as an error rather than silently ignored.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use facts_core::config::RootConfig;
use facts_core::error::{FactsError, Result};
use tracing::warn;

const CONFIG_DIR: &str = "country-facts";
const CONFIG_FILE: &str = "config.toml";

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service reading from the default per-user location.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FactsError::config("could not determine user config directory"))?;
        Ok(Self::with_path(config_dir.join(CONFIG_DIR).join(CONFIG_FILE)))
    }

    /// Creates a service reading from an explicit path. Used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A malformed file falls back to defaults with a warning; the
    /// application should still start.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "falling back to default configuration");
                RootConfig::default()
            }
        };

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_config(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            return Ok(RootConfig::default());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&contents)?)
    }
}
