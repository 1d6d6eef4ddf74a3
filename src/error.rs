//! Error types for pdfbind.
//!
//! Two error enums cover the two phases of an assembly job:
//!
//! - [`LoadError`] — opening and parsing a source document failed.
//! - [`AssemblyError`] — building or writing an output document failed.
//!
//! Errors carry the offending path and enough detail to be shown to a user
//! verbatim; callers are not expected to retry internally.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for assembly operations.
pub type Result<T> = std::result::Result<T, AssemblyError>;

/// Errors that can occur while opening a source PDF.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not exist.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The file exists but could not be parsed as a PDF.
    #[error("cannot read {} as a PDF: {details}", path.display())]
    Corrupt {
        /// Path to the unreadable file.
        path: PathBuf,
        /// Parser or I/O detail describing the failure.
        details: String,
    },
}

impl LoadError {
    /// Create a `NotFound` error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        LoadError::NotFound { path: path.into() }
    }

    /// Create a `Corrupt` error with failure details.
    pub fn corrupt(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        LoadError::Corrupt {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Path of the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path } => path,
            LoadError::Corrupt { path, .. } => path,
        }
    }
}

/// Errors that can occur while assembling or writing an output PDF.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The assembly plan contains no pages.
    #[error("no pages to assemble")]
    EmptyInput,

    /// A parameter is outside its valid range (e.g. zero pages per file).
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Creating, writing, or renaming an output file failed.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        /// Path the I/O operation targeted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A source document turned out to be unusable mid-operation.
    #[error("source unavailable: {} ({reason})", path.display())]
    SourceUnavailable {
        /// Path of the affected source document.
        path: PathBuf,
        /// What made the source unusable.
        reason: String,
    },

    /// The cancellation hook requested a stop.
    #[error("operation cancelled")]
    Cancelled,
}

impl AssemblyError {
    /// Create an `InvalidParameter` error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        AssemblyError::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an `Io` error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AssemblyError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a `SourceUnavailable` error.
    pub fn source_unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AssemblyError::SourceUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AssemblyError::Cancelled)
    }
}
