//! Commit Message Check
//!
//! A `commit-msg` hook that validates commit messages against the
//! Conventional Commits format.
//!
//! This library provides:
//! - Structural parsing of `type(scope)!: description` headers
//! - Semantic validation with typed violations
//! - The hook runner used by the `commit-message-check` binary

pub mod config;
pub mod hook;
pub mod parser;
pub mod validation;

pub use config::Config;
pub use parser::{Header, parse_header};
pub use validation::{ValidationResult, Violation, validate, validate_commit_message};
