//! Error types and context management for training, synthesis and file I/O

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::color::Color;
use crate::spatial::grid::Coordinate;

const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all crate operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Sampling or synthesis attempted on a model with no recorded pairs
    EmptyModel,

    /// Requested output has zero width or height, or too many pixels to address
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Seed coordinate lies outside the output grid
    SeedOutOfBounds {
        /// Requested seed `(x, y)`
        seed: Coordinate,
        /// Output dimensions `(width, height)`
        dimensions: (usize, usize),
    },

    /// Outgoing edges requested for a color never seen as a from-color
    ///
    /// Callers are expected to guard with `has_from`; seeing this from the
    /// sampling or synthesis flow indicates a defect.
    UnknownColor {
        /// The color that was looked up
        color: Color,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Persisted model could not be encoded or decoded
    ModelFormat {
        /// Path of the model file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Source data doesn't meet algorithm requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal invariant violated during a computation
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyModel => {
                write!(f, "Transition model is empty: no adjacencies were recorded")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid output dimensions {width}x{height}")
            }
            Self::SeedOutOfBounds { seed, dimensions } => {
                write!(
                    f,
                    "Seed ({}, {}) is outside the {}x{} output",
                    seed.0, seed.1, dimensions.0, dimensions.1
                )
            }
            Self::UnknownColor { color } => {
                write!(f, "Color {color} has no outgoing transitions")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::ModelFormat { path, source } => {
                write!(f, "Malformed model file '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::ModelFormat { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Attaches the file being worked on to errors that carry a path
pub trait WithPath<T> {
    /// Replace an unknown path in the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path filled in
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors converted without context carry the placeholder
            match &mut error {
                AlgorithmError::ImageLoad { path: slot, .. }
                | AlgorithmError::ImageExport { path: slot, .. }
                | AlgorithmError::ModelFormat { path: slot, .. }
                | AlgorithmError::FileSystem { path: slot, .. }
                    if slot.as_os_str() == UNKNOWN_PATH =>
                {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for AlgorithmError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for AlgorithmError {
    fn from(err: serde_json::Error) -> Self {
        Self::ModelFormat {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
