//! Error types for the docren-core library.
//!
//! The extraction and composition paths are deliberately infallible: a field
//! that cannot be matched resolves to `None`, never to an error. The only
//! fallible operations in this crate are around configuration files.

use thiserror::Error;

/// Main error type for the docren library.
#[derive(Error, Debug)]
pub enum DocrenError {
    /// I/O error while reading or writing a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the docren library.
pub type Result<T> = std::result::Result<T, DocrenError>;
