use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    Io(#[from] std::io::Error),

    #[error("Git error: {0}.")]
    Git(#[from] git2::Error),

    #[error("Cannot proceed: target '{target}' does not exist or is not a git repository.")]
    InvalidTarget { target: String },

    #[error("Malformed manifest '{manifest}': {reason}.")]
    MalformedManifest { manifest: String, reason: String },

    #[error("Failed to fetch '{repo}' at branch '{branch}': {reason}")]
    FetchFailed { repo: String, branch: String, reason: String },
}

/// Convenience type alias for Results with graft's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
