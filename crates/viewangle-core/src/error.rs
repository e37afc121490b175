//! Error types for viewangle.

use thiserror::Error;

/// The main error type for viewangle operations.
#[derive(Error, Debug)]
pub enum ViewAngleError {
    /// A view direction component was outside {-1, 0, 1}.
    #[error("view direction ({x}, {y}, {z}) has a component outside {{-1, 0, 1}}")]
    InvalidDirection { x: i32, y: i32, z: i32 },

    /// A pose contained NaN or infinite values.
    #[error("pose contains non-finite values")]
    NonFinitePose,

    /// The configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The widget has been shut down.
    #[error("view angle widget has been shut down")]
    ShutDown,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for viewangle operations.
pub type Result<T> = std::result::Result<T, ViewAngleError>;
