//! Parsed Commit Header
//!
//! Borrowed view over the fields of a structurally valid commit message.

use regex::Captures;

/// Fields extracted from a message that matches the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Type token, e.g. "feat"
    pub commit_type: &'a str,
    /// Scope without the surrounding parentheses
    pub scope: Option<&'a str>,
    /// Whether the `!` marker was present
    pub breaking: bool,
    /// Everything after ": ", possibly spanning several lines
    pub description: &'a str,
}

impl<'a> Header<'a> {
    pub(crate) fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        Some(Self {
            commit_type: caps.name("type")?.as_str(),
            scope: caps.name("scope").map(|m| m.as_str()),
            breaking: caps.name("breaking").is_some(),
            description: caps.name("description")?.as_str(),
        })
    }

    /// Whether a scope was given in parentheses
    pub fn has_scope(&self) -> bool {
        self.scope.is_some()
    }

    /// Whether the header carries the `!` breaking change marker
    pub fn is_breaking_change(&self) -> bool {
        self.breaking
    }

    /// First line of the description
    pub fn summary(&self) -> &'a str {
        self.description.lines().next().unwrap_or_default()
    }
}
