//! Configuration for the commit-msg hook.
//!
//! The hook takes exactly one argument, the commit message file. Help and
//! version flags are disabled so that every single argument is treated as a
//! path, including ones starting with `-`.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage line printed when the hook is invoked incorrectly
pub const USAGE: &str = "commit-message-check [git commit temp file]";

/// Command-line arguments for the hook
#[derive(Debug, Parser)]
#[command(name = "commit-message-check")]
#[command(about = "Check a commit message against the Conventional Commits format")]
#[command(override_usage = USAGE)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// File holding the proposed commit message (as passed by git)
    #[arg(allow_hyphen_values = true)]
    pub commit_msg_file: PathBuf,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the commit message file to check
    pub commit_msg_file: PathBuf,
}

impl Config {
    /// Create configuration from the process arguments
    pub fn try_from_env_args() -> Result<Self, clap::Error> {
        Self::try_from_iter(std::env::args_os())
    }

    /// Create configuration from an explicit argument list (useful for testing)
    pub fn try_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Args::try_parse_from(iter).map(Self::from_args)
    }

    pub fn from_args(args: Args) -> Self {
        Config {
            commit_msg_file: args.commit_msg_file,
        }
    }
}
