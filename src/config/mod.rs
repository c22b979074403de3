//! Configuration management for the Dobrodon CLI

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Dobrodon platform API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Volunteer email used for bonus history lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Bearer token for mutating endpoints (update-person)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".dobrodon").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => Self::load_from(Self::default_path()?),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path, or the default location.
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        match path {
            Some(p) => self.save_to(PathBuf::from(p)),
            None => self.save_to(Self::default_path()?),
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The token lives in this file; keep it private on Unix.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Get the API base URL, erroring if not configured.
    pub fn require_api_url(&self) -> Result<&str> {
        self.api_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiUrl.into())
    }

    /// Get the volunteer email, erroring if not configured.
    pub fn require_email(&self) -> Result<&str> {
        self.email
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEmail.into())
    }
}
