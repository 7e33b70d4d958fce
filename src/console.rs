//! Interactive console loop.
//!
//! Reads command lines, routes them through the catalog, runs the matching
//! handler and renders its output.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::commands::handlers::{ConsoleContext, Handler};
use crate::commands::output::{CommandOutput, OutputFormat, OutputRenderer};
use crate::commands::router::CommandRouter;
use crate::commands::tokenizer::trim_start;
use crate::commands::Catalog;
use crate::config::Config;
use crate::error::Result;

/// Message shown when no command matches the input.
pub const COMMAND_NOT_FOUND: &str = "Command not found";

/// A console bound to a command catalog.
pub struct Console<'a> {
    catalog: &'a Catalog<Handler>,
    config: &'a Config,
    renderer: OutputRenderer,
}

impl<'a> Console<'a> {
    /// Creates a new console.
    pub fn new(catalog: &'a Catalog<Handler>, config: &'a Config, format: OutputFormat) -> Self {
        Self {
            catalog,
            config,
            renderer: OutputRenderer::new(format).with_echo(config.console.echo),
        }
    }

    /// Executes a single line and returns its output.
    ///
    /// Blank lines produce [`CommandOutput::None`]. Unknown commands and
    /// handler failures are reported as [`CommandOutput::Error`].
    pub fn execute(&self, line: &str) -> CommandOutput {
        let router = CommandRouter::new(self.catalog, self.config.console.resolution);
        let (tokens, resolved) = router.tokenize_and_resolve(line);
        if trim_start(&tokens).is_empty() {
            return CommandOutput::None;
        }

        let Some((descriptor, consumed)) = resolved else {
            debug!("No command for input: {}", line);
            return CommandOutput::error(COMMAND_NOT_FOUND);
        };

        let ctx = ConsoleContext {
            catalog: self.catalog,
            config: self.config,
        };
        let handler = descriptor.handler();

        match handler(&ctx, &tokens[consumed..]) {
            Ok(output) => output,
            Err(e) => {
                warn!(
                    "{} failed ({}): {}",
                    descriptor.key(),
                    e.category(),
                    e
                );
                CommandOutput::error(e.to_string())
            }
        }
    }

    /// Runs the read-execute-print loop until an exit command or end of input.
    ///
    /// Returns the number of lines read.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<usize> {
        let console = &self.config.console;
        let mut lines = input.lines();
        let mut executed = 0;

        loop {
            if console.show_prompt {
                write!(output, "{}", console.prompt)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            executed += 1;

            let result = self.execute(&line);
            if let Some(text) = self.renderer.render(&line, &result) {
                writeln!(output, "{text}")?;
            }

            if result.is_exit() {
                info!("Exit requested after {} lines", executed);
                break;
            }
        }

        Ok(executed)
    }
}
