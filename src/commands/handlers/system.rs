//! Builtin command handlers (help, clear, version, exit, echo, show tokens).

use super::ConsoleContext;
use crate::commands::output::CommandOutput;
use crate::commands::tokenizer::{tokens_to_string, words, Token};
use crate::error::{ConsoleError, Result};

/// Handle `help [prefix...]`.
pub fn handle_help(ctx: &ConsoleContext<'_>, args: &[Token]) -> Result<CommandOutput> {
    let filter = words(args).collect::<Vec<_>>().join(" ");
    let help = ctx.catalog.help_text(Some(filter.as_str()));

    if help.is_empty() {
        return Err(ConsoleError::argument(format!(
            "No commands start with '{filter}'"
        )));
    }

    Ok(CommandOutput::lines(help.lines()))
}

/// Handle `clear`.
pub fn handle_clear(_ctx: &ConsoleContext<'_>, _args: &[Token]) -> Result<CommandOutput> {
    Ok(CommandOutput::Clear)
}

/// Handle `version`.
pub fn handle_version(_ctx: &ConsoleContext<'_>, _args: &[Token]) -> Result<CommandOutput> {
    Ok(CommandOutput::info(format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )))
}

/// Handle `exit` or `quit`.
pub fn handle_exit(_ctx: &ConsoleContext<'_>, _args: &[Token]) -> Result<CommandOutput> {
    Ok(CommandOutput::Exit)
}

/// Handle `echo <args>`.
pub fn handle_echo(_ctx: &ConsoleContext<'_>, args: &[Token]) -> Result<CommandOutput> {
    Ok(CommandOutput::info(tokens_to_string(args)))
}

/// Handle `show tokens <args>`.
pub fn handle_tokens(_ctx: &ConsoleContext<'_>, args: &[Token]) -> Result<CommandOutput> {
    if args.is_empty() {
        return Err(ConsoleError::argument("Usage: show tokens <text>"));
    }

    Ok(CommandOutput::lines(args.iter().map(|token| {
        format!(
            "{:>4}  {:<14} {:?}",
            token.offset(),
            format!("{:?}", token.kind()),
            token.value()
        )
    })))
}
