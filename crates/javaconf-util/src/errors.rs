use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for javaconf operations outside the resolver core.
#[derive(Debug, Error, Diagnostic)]
pub enum JavaconfError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration file.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check the javaconf config.toml for syntax errors"))]
    Config { message: String },

    /// A runtime or package descriptor is missing required keys or unreadable.
    #[error("Invalid descriptor {path}: {message}")]
    InvalidDescriptor { path: String, message: String },

    /// A runtime named on the command line is not registered.
    #[error("Runtime not found: {name}")]
    #[diagnostic(help("Run `javaconf list` to see registered runtimes"))]
    RuntimeNotFound { name: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type JavaconfResult<T> = miette::Result<T>;
