//! Errors raised around a render pass
//!
//! Rendering itself cannot fail. Everything here comes from reading sources,
//! interpreting settings, writing results or starting the logger.

use std::fmt;
use std::path::PathBuf;

/// Any failure of the command-line pipeline
#[derive(Debug)]
pub enum RenderError {
    /// A source file could not be opened or decoded
    ImageLoad {
        /// Source file
        path: PathBuf,
        /// Decoder failure
        source: image::ImageError,
    },

    /// A rendering could not be encoded or written
    ImageExport {
        /// Destination file
        path: PathBuf,
        /// Encoder failure
        source: image::ImageError,
    },

    /// A directory listing, creation or similar call failed
    FileSystem {
        /// Path the call was made on
        path: PathBuf,
        /// Short name of the call, e.g. `"create directory"`
        operation: &'static str,
        /// OS error
        source: std::io::Error,
    },

    /// A setting value is malformed or not allowed in this context
    InvalidParameter {
        /// Setting name
        parameter: &'static str,
        /// Value as given by the user
        value: String,
        /// What is wrong with it
        reason: String,
    },

    /// The path given to render is neither a supported image nor a directory
    InvalidTarget {
        /// Rejected path
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// The logger could not be started
    Logging {
        /// Backend failure
        source: flexi_logger::FlexiLoggerError,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "cannot decode '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "cannot write rendering to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "{operation} failed for '{}': {source}", path.display()),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "{parameter} '{value}' rejected: {reason}"),
            Self::InvalidTarget { path, reason } => {
                write!(f, "cannot render '{}': {reason}", path.display())
            }
            Self::Logging { source } => write!(f, "logger setup failed: {source}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            Self::InvalidParameter { .. } | Self::InvalidTarget { .. } => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RenderError>;

impl From<image::ImageError> for RenderError {
    fn from(source: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::new(),
            source,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(source: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::new(),
            operation: "io",
            source,
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for RenderError {
    fn from(source: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logging { source }
    }
}

/// Shorthand for [`RenderError::InvalidParameter`]
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RenderError {
    RenderError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Shorthand for [`RenderError::InvalidTarget`]
pub fn invalid_target(path: impl Into<PathBuf>, reason: &impl ToString) -> RenderError {
    RenderError::InvalidTarget {
        path: path.into(),
        reason: reason.to_string(),
    }
}
