//! Commit Header Grammar
//!
//! The pattern is assembled from four named fragments and compiled once.

use regex::Regex;
use std::sync::LazyLock;

/// Commit type: lowercase ASCII letters only
pub const TYPE_PATTERN: &str = r"(?P<type>[a-z]+)";

/// Optional scope in parentheses, e.g. `(api)` or `(git_hooks-v)`
pub const SCOPE_PATTERN: &str = r"(?:\((?P<scope>[a-z]+[a-z_\-]*)\))?";

/// Optional breaking change marker
pub const BREAKING_CHANGE_PATTERN: &str = r"(?P<breaking>!)?";

/// Free text after the separator, newlines included
pub const DESCRIPTION_PATTERN: &str = r"(?P<description>[\S\s]+)";

/// Literal separator between the header fields and the description
pub const SEPARATOR: &str = ": ";

/// Compose the full anchored pattern from its fragments
pub fn build_pattern() -> String {
    format!(
        r"\A{TYPE_PATTERN}{SCOPE_PATTERN}{BREAKING_CHANGE_PATTERN}{SEPARATOR}{DESCRIPTION_PATTERN}\z"
    )
}

pub(crate) static CONVENTIONAL_COMMIT: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(&build_pattern()) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid conventional commit regex: {err}"),
    });
