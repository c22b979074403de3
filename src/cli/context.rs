//! Command execution context
//!
//! Provides a unified context for command execution, eliminating
//! boilerplate for config loading and client initialization.

use std::sync::Arc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::DobrodonClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime
/// options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// API client (Arc-wrapped so views and handlers can share it)
    pub client: Arc<DobrodonClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config from the path override (or the default location),
    /// applies the `--api-url` override, and builds the API client.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded or no API URL is
    /// available from either the config or the override.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;

        if let Some(url) = &opts.api_url {
            config.api_url = Some(url.clone());
        }

        let api_url = config.require_api_url()?;
        let client = Arc::new(DobrodonClient::new(api_url, config.token.clone())?);

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }
}
