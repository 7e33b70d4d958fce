//! Command parsing and dispatch for verbsh.
//!
//! Tokenizing and verb matching are pure functions over the input line, so
//! they can be unit tested without a console or any registered handlers.

pub mod definitions;
pub mod handlers;
pub mod matcher;
pub mod output;
pub mod router;
pub mod tokenizer;

pub use definitions::{Catalog, CatalogBuilder, CommandDescriptor, CommandSpec};
pub use handlers::{ConsoleContext, Handler};
pub use matcher::{match_verbs, VerbMatch};
pub use output::{CommandOutput, OutputFormat};
pub use router::{CommandRouter, Dispatch, ResolutionPolicy};
pub use tokenizer::{tokenize, tokens_to_string, Token, TokenKind};
