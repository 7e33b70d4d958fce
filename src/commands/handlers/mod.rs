//! Command handlers for verbsh.
//!
//! Each handler is a plain function that receives the console context and the
//! argument tail left over after verb matching.

pub mod system;

use super::definitions::{Catalog, CatalogBuilder, CommandSpec};
use super::output::CommandOutput;
use super::tokenizer::Token;
use crate::config::Config;
use crate::error::Result;

/// Signature shared by all command handlers.
pub type Handler = fn(&ConsoleContext<'_>, &[Token]) -> Result<CommandOutput>;

/// Context provided to command handlers.
pub struct ConsoleContext<'a> {
    /// The catalog the command was resolved from.
    pub catalog: &'a Catalog<Handler>,
    /// Active configuration.
    pub config: &'a Config,
}

/// Registers the builtin console commands.
pub fn register_builtins(builder: CatalogBuilder<Handler>) -> CatalogBuilder<Handler> {
    builder
        .register(
            CommandSpec::new("help", system::handle_help as Handler)
                .description("Show commands, optionally filtered by prefix"),
        )
        .register(
            CommandSpec::new("clear", system::handle_clear as Handler)
                .description("Clear the screen"),
        )
        .register(
            CommandSpec::new("version", system::handle_version as Handler)
                .description("Show the console version"),
        )
        .register(
            CommandSpec::new("exit", system::handle_exit as Handler)
                .description("Exit the console"),
        )
        .register(
            CommandSpec::new("quit", system::handle_exit as Handler)
                .description("Exit the console"),
        )
        .register(
            CommandSpec::new("echo", system::handle_echo as Handler)
                .category("Diagnostic Commands")
                .description("Print the arguments in canonical form"),
        )
        .register(
            CommandSpec::new("show tokens", system::handle_tokens as Handler)
                .category("Diagnostic Commands")
                .description("List the tokens of the arguments"),
        )
}

/// Builds a catalog containing only the builtin commands.
pub fn builtin_catalog() -> Result<Catalog<Handler>> {
    register_builtins(Catalog::builder()).build()
}
