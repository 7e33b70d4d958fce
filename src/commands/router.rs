//! Command routing for verbsh.
//!
//! Matches tokenized user input against every command in a catalog and picks
//! the one that should run, along with the argument tail.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::definitions::{Catalog, CommandDescriptor};
use super::tokenizer::{tokenize, tokens_to_string, Token};

/// How to choose between several commands that match the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPolicy {
    /// The longest matching verb sequence wins; ties go to the earliest
    /// registration.
    #[default]
    Longest,
    /// The earliest registered match wins.
    First,
}

impl std::str::FromStr for ResolutionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "longest" => Ok(Self::Longest),
            "first" => Ok(Self::First),
            _ => Err(format!(
                "Invalid resolution policy: {s}. Expected: longest or first"
            )),
        }
    }
}

/// A matching command, described independently of the tokens it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the command in the catalog.
    pub index: usize,
    /// Number of verbs in the command's name.
    pub verb_count: usize,
    /// Tokens consumed by the match.
    pub consumed: usize,
}

/// Picks the winning candidate under `policy`.
///
/// Candidates must be supplied in registration order.
pub fn select_candidate(
    candidates: impl IntoIterator<Item = Candidate>,
    policy: ResolutionPolicy,
) -> Option<Candidate> {
    let mut candidates = candidates.into_iter();
    match policy {
        ResolutionPolicy::First => candidates.next(),
        ResolutionPolicy::Longest => {
            candidates.fold(None, |best: Option<Candidate>, c| match best {
                Some(b) if b.verb_count >= c.verb_count => Some(b),
                _ => Some(c),
            })
        }
    }
}

/// A resolved command and the input left over for its arguments.
#[derive(Debug)]
pub struct Dispatch<'c, 't, H> {
    /// The command to run.
    pub descriptor: &'c CommandDescriptor<H>,
    /// Number of leading tokens that named the command.
    pub consumed: usize,
    /// Tokens after the command name, with leading spaces trimmed.
    pub arguments: &'t [Token],
}

impl<H> Dispatch<'_, '_, H> {
    /// Returns the argument tail as text.
    pub fn arguments_text(&self) -> String {
        tokens_to_string(self.arguments)
    }
}

/// Routes input to commands in a catalog.
#[derive(Debug)]
pub struct CommandRouter<'c, H> {
    catalog: &'c Catalog<H>,
    policy: ResolutionPolicy,
}

impl<'c, H> CommandRouter<'c, H> {
    /// Creates a router over `catalog`.
    pub fn new(catalog: &'c Catalog<H>, policy: ResolutionPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Resolves already tokenized input.
    pub fn resolve<'t>(&self, tokens: &'t [Token]) -> Option<Dispatch<'c, 't, H>> {
        let candidates = self.catalog.iter().enumerate().filter_map(|(index, cmd)| {
            let result = cmd.match_tokens(tokens);
            result.matched.then(|| Candidate {
                index,
                verb_count: cmd.verbs().len(),
                consumed: result.consumed,
            })
        });

        let Some(winner) = select_candidate(candidates, self.policy) else {
            debug!("No command matched {} tokens", tokens.len());
            return None;
        };

        let descriptor = self.catalog.get(winner.index)?;
        debug!(
            "Resolved '{}' ({} tokens consumed)",
            descriptor.key(),
            winner.consumed
        );
        Some(Dispatch {
            descriptor,
            consumed: winner.consumed,
            arguments: &tokens[winner.consumed..],
        })
    }

    /// Tokenizes `line` and resolves it.
    ///
    /// Returns the tokens so callers can borrow the argument tail from them.
    pub fn tokenize_and_resolve(
        &self,
        line: &str,
    ) -> (Vec<Token>, Option<(&'c CommandDescriptor<H>, usize)>) {
        let tokens: Vec<Token> = tokenize(line).collect();
        let resolved = self
            .resolve(&tokens)
            .map(|dispatch| (dispatch.descriptor, dispatch.consumed));
        (tokens, resolved)
    }
}
