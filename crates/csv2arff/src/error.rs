//! Error types for the csv2arff library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source path does not resolve to a file.
    #[error("File '{}' not found", path.display())]
    SourceNotFound { path: PathBuf },

    /// Error opening or reading the source file.
    #[error("Error reading file '{}': {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library while decoding the source.
    #[error("Error reading file '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The source has no header row, or a row whose field count differs
    /// from the header's.
    #[error("Malformed file '{}': {reason}", path.display())]
    MalformedSource { path: PathBuf, reason: String },

    /// Error creating or writing the destination file.
    #[error("Error writing to file '{}': {source}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// The path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConvertError::SourceNotFound { path }
            | ConvertError::SourceRead { path, .. }
            | ConvertError::Csv { path, .. }
            | ConvertError::MalformedSource { path, .. }
            | ConvertError::DestinationWrite { path, .. } => path,
        }
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
