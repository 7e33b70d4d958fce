//! Transport-agnostic command output types.
//!
//! Handlers return a [`CommandOutput`]; the console renders it as plain text
//! for interactive use or as JSON lines for scripting.

use serde::Serialize;

use super::tokenizer::{tokenize, tokens_to_string, trim_start, Token};

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CommandOutput {
    /// Nothing to show.
    None,

    /// Informational message.
    Info(String),

    /// Error message.
    Error(String),

    /// Several lines of text (help listings, token dumps, etc.).
    Lines(Vec<String>),

    /// Clear the screen.
    Clear,

    /// Leave the console loop.
    Exit,
}

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates a multi-line output.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Returns true if the console should stop after this output.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per executed line.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    echo: Option<String>,
    output: &'a CommandOutput,
}

/// Renders command output in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct OutputRenderer {
    format: OutputFormat,
    echo: bool,
}

impl OutputRenderer {
    /// Creates a new renderer.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            echo: false,
        }
    }

    /// Also emits the canonical form of each input line: as its own line in
    /// text mode, as an `echo` field in JSON mode.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Renders the output of `input`. Returns `None` when nothing should be
    /// printed.
    pub fn render(&self, input: &str, output: &CommandOutput) -> Option<String> {
        let echo = self.echo.then(|| canonical_line(input));
        match self.format {
            OutputFormat::Text => match (echo, Self::render_text(output)) {
                (Some(line), Some(text)) => Some(format!("{line}\n{text}")),
                (echo, text) => echo.or(text),
            },
            OutputFormat::Json => Some(Self::render_json(input, echo, output)),
        }
    }

    fn render_text(output: &CommandOutput) -> Option<String> {
        match output {
            CommandOutput::None | CommandOutput::Exit => None,
            CommandOutput::Info(msg) => Some(msg.clone()),
            CommandOutput::Error(msg) => Some(format!("error: {msg}")),
            CommandOutput::Lines(lines) => Some(lines.join("\n")),
            CommandOutput::Clear => Some(CLEAR_SCREEN.to_string()),
        }
    }

    fn render_json(input: &str, echo: Option<String>, output: &CommandOutput) -> String {
        serde_json::to_string(&JsonRecord {
            input,
            echo,
            output,
        })
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize: {}\"}}", e))
    }
}

/// Rebuilds `line` from its tokens, without leading spaces.
fn canonical_line(line: &str) -> String {
    let tokens: Vec<Token> = tokenize(line).collect();
    tokens_to_string(trim_start(&tokens))
}
