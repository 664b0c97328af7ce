//! Unified path management for tiket configuration files.
//!
//! All configuration and session data live under the platform config
//! directory; generated report files go to the data directory.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/tiket/             # Config directory
//! ├── config.toml              # API endpoints
//! └── auth.json                # Persisted session (token + user)
//!
//! ~/.local/share/tiket/        # Data directory
//! └── reports/                 # Generated printable reports
//! ```

use std::path::PathBuf;

use tiket_core::error::{Result, TiketError};

const APP_DIR: &str = "tiket";

/// Unified path management for tiket.
pub struct TiketPaths;

impl TiketPaths {
    /// Returns the tiket configuration directory (e.g., `~/.config/tiket/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| TiketError::config("Cannot determine config directory"))
    }

    /// Returns the tiket data directory (e.g., `~/.local/share/tiket/`).
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| TiketError::config("Cannot determine data directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted session file.
    ///
    /// The file holds a bearer token; it is written with 600 permissions
    /// on Unix.
    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("auth.json"))
    }

    /// Returns the directory where generated report files are written.
    pub fn reports_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("reports"))
    }
}
