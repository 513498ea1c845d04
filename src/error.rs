//! Error handling for the flaskgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for flaskgen operations.
///
/// Template rendering failures are intentionally absent: a template that cannot be
/// rendered is emitted as its raw source instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The project directory (or any file with the same name) already exists.
    #[error("Project directory '{}' already exists.", path.display())]
    AlreadyExists { path: PathBuf },

    /// Creating the project root or one of its subdirectories failed.
    #[error("Failed to create directory '{}': {source}.", path.display())]
    DirectoryCreateError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a planned file failed.
    #[error("Failed to write file '{}': {source}.", path.display())]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unknown project structure: '{0}'.")]
    UnknownStructure(String),

    #[error("Unknown application type: '{0}'.")]
    UnknownArchetype(String),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Interactive input could not be collected
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The answer document is neither JSON nor YAML, or has the wrong shape
    #[error("Answers error: {0}.")]
    AnswersError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
