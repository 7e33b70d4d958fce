//! Command definitions and the command catalog.
//!
//! Commands are registered explicitly through [`CatalogBuilder`], which
//! validates every definition once at startup. The resulting [`Catalog`] is
//! immutable and can be shared freely between threads. It enables:
//! - Verb matching against user input
//! - Auto-generated help text grouped by category
//! - Lookup by command key

use std::collections::HashSet;

use tracing::{debug, warn};

use super::matcher::{match_verbs, VerbMatch};
use super::tokenizer::{Token, QUOTE};
use crate::error::{ConsoleError, Result};

/// Category used in help output for commands registered without one.
pub const DEFAULT_CATEGORY: &str = "Base Commands";

/// Definition of a command before validation.
#[derive(Debug, Clone)]
pub struct CommandSpec<H> {
    verbs: Vec<String>,
    handler: H,
    category: Option<String>,
    description: Option<String>,
}

impl<H> CommandSpec<H> {
    /// Creates a command from a space-separated key such as `"start oracle"`.
    ///
    /// Verbs are lowercased.
    pub fn new(key: &str, handler: H) -> Self {
        Self::from_verbs(key.split_whitespace(), handler)
    }

    /// Creates a command from an explicit verb list.
    pub fn from_verbs<I, S>(verbs: I, handler: H) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            verbs: verbs
                .into_iter()
                .map(|v| v.as_ref().to_lowercase())
                .collect(),
            handler,
            category: None,
            description: None,
        }
    }

    /// Sets the help category.
    pub fn category(self, category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..self
        }
    }

    /// Sets the help description.
    pub fn description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    fn validate(&self) -> Result<()> {
        if self.verbs.is_empty() {
            return Err(ConsoleError::catalog("command has no verbs"));
        }
        for verb in &self.verbs {
            if verb.is_empty() || verb.chars().any(|c| c.is_whitespace()) {
                return Err(ConsoleError::catalog(format!(
                    "invalid verb '{verb}' in command '{}'",
                    self.verbs.join(" ")
                )));
            }
            if verb.contains(QUOTE) {
                return Err(ConsoleError::catalog(format!(
                    "verb '{verb}' must not contain a quote character"
                )));
            }
        }
        Ok(())
    }
}

/// A validated command in the catalog.
#[derive(Debug, Clone)]
pub struct CommandDescriptor<H> {
    verbs: Vec<String>,
    key: String,
    handler: H,
    category: Option<String>,
    description: Option<String>,
}

impl<H> CommandDescriptor<H> {
    /// Returns the lowercase verbs naming this command.
    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    /// Returns the space-joined verb sequence.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the handler registered for this command.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Returns the help category, if one was set.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the help description, if one was set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Matches the start of `tokens` against this command's verbs.
    pub fn match_tokens(&self, tokens: &[Token]) -> VerbMatch {
        match_verbs(tokens, &self.verbs)
    }
}

/// Collects command definitions and builds a [`Catalog`].
#[derive(Debug)]
pub struct CatalogBuilder<H> {
    specs: Vec<CommandSpec<H>>,
}

impl<H> Default for CatalogBuilder<H> {
    fn default() -> Self {
        Self { specs: Vec::new() }
    }
}

impl<H> CatalogBuilder<H> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command. Registration order breaks ties during dispatch.
    pub fn register(mut self, spec: CommandSpec<H>) -> Self {
        self.specs.push(spec);
        self
    }

    /// Validates all definitions and builds the catalog.
    ///
    /// Fails on the first command with no verbs or with an invalid verb.
    /// Duplicate keys are allowed; the one registered first wins.
    pub fn build(self) -> Result<Catalog<H>> {
        let mut seen = HashSet::new();
        let mut commands = Vec::with_capacity(self.specs.len());

        for spec in self.specs {
            spec.validate()?;
            let key = spec.verbs.join(" ");
            if !seen.insert(key.clone()) {
                warn!("Duplicate command '{}'; first registration wins", key);
            }
            commands.push(CommandDescriptor {
                verbs: spec.verbs,
                key,
                handler: spec.handler,
                category: spec.category,
                description: spec.description,
            });
        }

        debug!("Built command catalog with {} commands", commands.len());
        Ok(Catalog { commands })
    }
}

/// Immutable, ordered set of commands.
#[derive(Debug, Clone)]
pub struct Catalog<H> {
    commands: Vec<CommandDescriptor<H>>,
}

impl<H> Catalog<H> {
    /// Starts building a catalog.
    pub fn builder() -> CatalogBuilder<H> {
        CatalogBuilder::new()
    }

    /// Returns the commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor<H>> {
        self.commands.iter()
    }

    /// Returns the command at `index` in registration order.
    pub fn get(&self, index: usize) -> Option<&CommandDescriptor<H>> {
        self.commands.get(index)
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Finds the first command with the given key, ignoring case.
    pub fn find(&self, key: &str) -> Option<&CommandDescriptor<H>> {
        let key = key.split_whitespace().collect::<Vec<_>>().join(" ");
        let key = key.to_lowercase();
        self.commands.iter().find(|c| c.key == key)
    }

    /// Returns help categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for command in &self.commands {
            let category = command.category().unwrap_or(DEFAULT_CATEGORY);
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Generates help text grouped by category.
    ///
    /// With a filter, only commands whose key starts with it are listed.
    pub fn help_text(&self, filter: Option<&str>) -> String {
        let filter = filter
            .map(|f| f.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
            .filter(|f| !f.is_empty());

        self.categories()
            .into_iter()
            .filter_map(|category| {
                let cmds: Vec<_> = self
                    .commands
                    .iter()
                    .filter(|c| c.category().unwrap_or(DEFAULT_CATEGORY) == category)
                    .filter(|c| filter.as_ref().map_or(true, |f| c.key.starts_with(f.as_str())))
                    .collect();

                if cmds.is_empty() {
                    return None;
                }

                let command_lines = cmds
                    .iter()
                    .map(|cmd| match cmd.description() {
                        Some(desc) => format!("  {:<16} - {}\n", cmd.key, desc),
                        None => format!("  {}\n", cmd.key),
                    })
                    .collect::<Vec<_>>()
                    .join("");

                Some(format!("{}:\n{}", category, command_lines))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
