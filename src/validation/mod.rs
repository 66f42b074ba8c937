//! Validation Engine
//!
//! Conventional Commits rules layered on top of the parser.

pub mod engine;

pub use engine::{
    RECOGNIZED_TYPES, ValidationResult, Violation, is_recognized_type, validate,
    validate_commit_message,
};
