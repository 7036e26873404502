use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Per-item failures never change the exit code; only setup failures
/// (store connection, resolver or merger initialisation, unreadable input)
/// end the run with `ApplicationError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The pipeline ran to completion
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Setup error (database, resolver, merger, configuration, file I/O)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the sampling and call-graph pipelines.
///
/// Seed-membership validation is deliberately absent: a dependent that does
/// not depend on its seed is an expected outcome, not an error.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Malformed coordinate '{input}': expected group:artifact[:version]")]
    MalformedCoordinate { input: String },

    #[error("Failed to resolve {what} of {coordinate}\nDetails: {details}")]
    ResolutionFailure {
        what: String,
        coordinate: String,
        details: String,
    },

    #[error("Not enough artefacts available for sample size: {required} (population: {available})")]
    InsufficientPopulation { required: usize, available: usize },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the output directory")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid date '{input}': expected format dd/mm/yyyy")]
    InvalidDate { input: String },

    #[error("Invalid sampling frame: start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
