//! Configuration management for verbsh.
//!
//! Handles loading configuration from a TOML file and environment variables.

use crate::commands::router::ResolutionPolicy;
use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the prompt.
pub const PROMPT_ENV: &str = "VERBSH_PROMPT";

/// Main configuration structure for verbsh.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Console behaviour.
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Console behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Prompt printed before each line in interactive mode.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Whether to print the prompt at all.
    #[serde(default = "default_show_prompt")]
    pub show_prompt: bool,

    /// Echo the canonical form of each line before running it.
    #[serde(default)]
    pub echo: bool,

    /// How to pick between several matching commands.
    #[serde(default)]
    pub resolution: ResolutionPolicy,
}

fn default_prompt() -> String {
    "neo> ".to_string()
}

fn default_show_prompt() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_prompt: default_show_prompt(),
            echo: false,
            resolution: ResolutionPolicy::default(),
        }
    }
}

impl ConsoleConfig {
    /// Applies environment variables as overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(prompt) = std::env::var(PROMPT_ENV) {
            self.prompt = prompt;
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("verbsh")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConsoleError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ConsoleError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
