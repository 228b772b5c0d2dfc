//! Configuration for the monero-rpc CLI
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line arguments.

use crate::args::CliArgs;
use anyhow::{Context, Result};
use monero_rpc_client::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Endpoint used when neither the config file nor the command line names one
pub const DEFAULT_URL: &str = "http://127.0.0.1:18081/json_rpc";

/// RPC endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Endpoint URL, may carry `user:pass@` for Digest authentication
    pub url: String,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log level or `EnvFilter` directive
    pub level: String,
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub rpc: RpcConfig,
    pub logger: LoggerConfig,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Loads the configured file, if any, and applies argument overrides.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    /// Apply command-line arguments to override configuration
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(url) = &args.url {
            self.rpc.url = url.clone();
        }

        if let Some(timeout) = args.timeout {
            self.rpc.timeout_secs = timeout;
        }

        if let Some(level) = args.verbose {
            self.logger.level = level.as_str().to_string();
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rpc.timeout_secs)
    }
}
