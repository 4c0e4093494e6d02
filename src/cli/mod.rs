//! CLI module for the pasc frontend
//!
//! This module provides the command-line interface for the frontend.
//!
//! ## Commands
//!
//! - `check <file>` - Parse a file and report diagnostics
//! - `dump <file>` - Parse a file and print its syntax tree
//! - `resolve <file> <offset>` - Resolve the identifier at a byte offset
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The pasc Pascal frontend
#[derive(Parser, Debug)]
#[command(name = "pasc")]
#[command(version = VERSION)]
#[command(about = "Parse, check and inspect Pascal programs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a file and report diagnostics
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a file and print its syntax tree
    Dump {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Resolve the identifier at a byte offset to its declaration
    Resolve {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Byte offset of the identifier use
        #[arg(value_name = "OFFSET")]
        offset: usize,
    },
}

/// Run the CLI: parse arguments, dispatch, and exit with the command's code.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check { file } => commands::check_file(&file),
        Command::Dump { file } => commands::dump_file(&file),
        Command::Resolve { file, offset } => commands::resolve_at(&file, offset),
    };

    match result {
        Ok(code) => process::exit(code.0),
        Err(err) => {
            eprintln!("error: {}", err.message);
            process::exit(err.exit_code.0);
        }
    }
}
