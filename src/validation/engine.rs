//! Validation Engine
//!
//! Structural matching first, then independent semantic checks on the
//! extracted fields. A message that fails structurally gets exactly one
//! violation; otherwise every failing semantic check is reported.

use std::fmt;

use crate::parser::{Header, parse_header};

/// Commit types accepted by this project (case-sensitive)
pub const RECOGNIZED_TYPES: &[&str] = &["fix", "ci", "bump", "chore", "feat", "test"];

/// Check a type token against [`RECOGNIZED_TYPES`]
pub fn is_recognized_type(token: &str) -> bool {
    RECOGNIZED_TYPES.contains(&token)
}

/// Reason a commit message was rejected
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The message does not have the `type(scope)!: description` shape
    InvalidFormat,
    /// `!` was given without a scope
    MissingScopeOnBreakingChange,
    /// The type token is well-formed but not recognized
    UnknownType(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidFormat => {
                write!(f, "Commit message does not match conventional commits spec.")
            }
            Violation::MissingScopeOnBreakingChange => {
                write!(f, "Missing scope on breaking change!")
            }
            Violation::UnknownType(commit_type) => {
                write!(f, "Unknown commit type: {}", commit_type)
            }
        }
    }
}

/// Result of validating a commit message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Split into the `(ok, violations)` pair
    pub fn into_parts(self) -> (bool, Vec<Violation>) {
        (self.is_valid(), self.violations)
    }
}

/// Validate a full commit message
pub fn validate(message: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    match parse_header(message) {
        Some(header) => validate_header(&header, &mut result),
        None => result.add(Violation::InvalidFormat),
    }

    if !result.is_valid() {
        log::debug!("Commit message rejected: {:?}", result.violations);
    }

    result
}

/// Validate a commit message, returning `(ok, violations)`
pub fn validate_commit_message(message: &str) -> (bool, Vec<Violation>) {
    validate(message).into_parts()
}

/// Semantic checks on a structurally valid header, in reporting order
fn validate_header(header: &Header<'_>, result: &mut ValidationResult) {
    if header.is_breaking_change() && !header.has_scope() {
        result.add(Violation::MissingScopeOnBreakingChange);
    }

    if !is_recognized_type(header.commit_type) {
        result.add(Violation::UnknownType(header.commit_type.to_string()));
    }
}
