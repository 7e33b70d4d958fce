//! Command-line argument parsing for verbsh.
//!
//! Uses clap to parse CLI arguments.

use clap::Parser;
use std::path::PathBuf;
use verbsh::commands::{OutputFormat, ResolutionPolicy};
use verbsh::config::{Config, ConsoleConfig};
use verbsh::error::{ConsoleError, Result};

/// Console command tokenizer and multi-word verb dispatcher.
#[derive(Parser, Debug)]
#[command(name = "verbsh")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c', long, value_name = "LINE")]
    pub command: Option<String>,

    /// Script file with one command per line (use "-" for stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "command")]
    pub script: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH", env = "VERBSH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: String,

    /// Prompt shown in interactive mode
    #[arg(long, value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Run the first registered matching command instead of the longest
    #[arg(long)]
    pub first_match: bool,

    /// Print each line in canonical form before running it
    #[arg(long)]
    pub echo: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path, using the default if not specified.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Returns true when input comes from a terminal session rather than a
    /// script or a single `--command`.
    pub fn is_interactive(&self) -> bool {
        self.command.is_none() && self.script.is_none()
    }

    /// Parses the requested output format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.parse().map_err(ConsoleError::config)
    }

    /// Applies CLI flags on top of the loaded configuration.
    pub fn apply_overrides(&self, console: &mut ConsoleConfig) {
        if let Some(prompt) = &self.prompt {
            console.prompt = prompt.clone();
        }
        if self.first_match {
            console.resolution = ResolutionPolicy::First;
        }
        if self.echo {
            console.echo = true;
        }
        if !self.is_interactive() {
            console.show_prompt = false;
        }
    }
}
