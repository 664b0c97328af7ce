//! Configuration file service.
//!
//! Loads `config.toml` from the config directory, writing a default file
//! on first use so operators have something to edit.

use std::fs;
use std::path::PathBuf;

use tiket_core::config::ClientConfig;
use tiket_core::error::Result;

use crate::paths::TiketPaths;

/// Service for loading and saving the client configuration.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service at the default path (`~/.config/tiket/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: TiketPaths::config_file()?,
        })
    }

    /// Creates a service with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration, creating the file with defaults when it
    /// doesn't exist yet.
    pub fn load_or_init(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            let config = ClientConfig::default();
            self.save(&config)?;
            tracing::info!(path = %self.path.display(), "wrote default configuration");
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration.
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
