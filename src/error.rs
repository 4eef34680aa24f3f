//! Error handling for ggen.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while resolving a command or generating its tree.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The requested command has no entry in the configuration
    #[error("Command \"{command}\" doesn't exist.")]
    CommandNotFound { command: String },

    #[error("No command given. Run 'ggen <command> [options]'.")]
    MissingCommand,

    /// A file node references a template the store cannot provide
    #[error("Template '{template}' not found (looked in '{location}').")]
    TemplateNotFound { template: String, location: String },

    /// A rendered entry name would escape the target directory
    #[error("Invalid rendered path '{path}'.")]
    InvalidPathError { path: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
