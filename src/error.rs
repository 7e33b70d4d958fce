//! Error types for verbsh.
//!
//! Defines the main error enum used throughout the console.

use thiserror::Error;

/// Main error type for console operations.
///
/// Tokenizing never fails and a non-matching command is a normal outcome,
/// so none of these variants are produced by the parse path itself.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration errors (invalid config file, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog definition errors (empty verb list, invalid verb, etc.)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A handler rejected its argument tail.
    #[error("Argument error: {0}")]
    Argument(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a catalog error with the given message.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Creates an argument error with the given message.
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Catalog(_) => "Catalog Error",
            Self::Argument(_) => "Argument Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

/// Result type alias using ConsoleError.
pub type Result<T> = std::result::Result<T, ConsoleError>;
