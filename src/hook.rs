//! commit-msg hook runner
//!
//! Reads the message file git hands us, validates it and prints one
//! `* reason` line per violation.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::process::ExitCode;

use crate::Config;
use crate::validation::{ValidationResult, validate};

/// Outcome of a hook run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    Accepted,
    Rejected,
}

impl From<HookOutcome> for ExitCode {
    fn from(outcome: HookOutcome) -> Self {
        match outcome {
            HookOutcome::Accepted => ExitCode::SUCCESS,
            HookOutcome::Rejected => ExitCode::FAILURE,
        }
    }
}

/// Check the configured commit message file, writing violations to `out`
pub fn run(config: &Config, out: &mut impl Write) -> Result<HookOutcome> {
    let path = &config.commit_msg_file;
    let message = fs::read_to_string(path)
        .with_context(|| format!("Failed to read commit message file {}", path.display()))?;

    log::debug!("Checking commit message from {}", path.display());

    let result = validate(&message);
    if result.is_valid() {
        return Ok(HookOutcome::Accepted);
    }

    report(&result, out)?;
    Ok(HookOutcome::Rejected)
}

/// Render each violation on its own `* ` line
pub fn report(result: &ValidationResult, out: &mut impl Write) -> Result<()> {
    for violation in &result.violations {
        writeln!(out, "* {}", violation)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;
    use std::path::PathBuf;

    fn config_for(path: PathBuf) -> Config {
        Config { commit_msg_file: path }
    }

    #[test]
    fn test_report_lines() {
        let result = ValidationResult {
            violations: vec![
                Violation::MissingScopeOnBreakingChange,
                Violation::UnknownType("weird".to_string()),
            ],
        };
        let mut out = Vec::new();
        report(&result, &mut out).expect("report");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "* Missing scope on breaking change!\n* Unknown commit type: weird\n"
        );
    }

    #[test]
    fn test_run_accepts_valid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "feat(hook): check messages\n").expect("write");

        let mut out = Vec::new();
        let outcome = run(&config_for(path), &mut out).expect("run");

        assert_eq!(outcome, HookOutcome::Accepted);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_rejects_invalid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "Update stuff").expect("write");

        let mut out = Vec::new();
        let outcome = run(&config_for(path), &mut out).expect("run");

        assert_eq!(outcome, HookOutcome::Rejected);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "* Commit message does not match conventional commits spec.\n"
        );
    }

    #[test]
    fn test_run_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("does-not-exist");

        let err = run(&config_for(path), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Failed to read commit message file"));
    }
}
