/// Handles argument parsing and the CLI workflow.
pub mod cli;

/// Constants used across the application.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// An abstraction that allows implementing a source for template subtrees.
pub mod fetch;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Reading and creating the template manifest.
pub mod manifest;

/// The per-path copy engine and its report.
pub mod materialize;
