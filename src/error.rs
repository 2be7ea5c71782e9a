//! Error types for the face-rainbow library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Landmark index outside the face's keypoint sequence
    #[error("Landmark index out of range: {name} -> {index} (face has {len} keypoints)")]
    LandmarkIndex {
        /// Semantic name of the landmark being looked up
        name: &'static str,
        /// Index requested by the layout
        index: usize,
        /// Number of keypoints actually present
        len: usize,
    },

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
