//! Error types for the Doppel duplicate detection library.
//!
//! Errors are organized by concern: configuration problems surface to the
//! caller, while comparison errors are absorbed inside the detector (a failed
//! candidate degrades to zero similarity rather than aborting the scan).

use thiserror::Error;

/// Top-level error type for Doppel operations.
#[derive(Error, Debug)]
pub enum DoppelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Image comparison errors
    #[error("Comparison error: {0}")]
    Compare(#[from] CompareError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while loading and comparing a single pair of images.
///
/// The detector catches every variant at the smallest possible scope; none of
/// them escape `detect_duplicate`.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Image fetch/decode did not complete within the allotted window
    #[error("Timed out loading {url} after {timeout_ms}ms")]
    LoadTimeout { url: String, timeout_ms: u64 },

    /// Image fetch or decode failed outright
    #[error("Failed to load {url}: {message}")]
    Load { url: String, message: String },

    /// Hash lengths differ or are zero; should not occur with a fixed grid
    #[error("Hashes are not comparable: lengths {left} and {right}")]
    IncomparableHashes { left: usize, right: usize },

    /// No usable (non-transparent) colors extracted from the image
    #[error("No usable colors extracted from {url}")]
    EmptyPalette { url: String },
}

/// Convenience type alias for Doppel results.
pub type Result<T> = std::result::Result<T, DoppelError>;

/// Convenience type alias for comparison-stage results.
pub type CompareResult<T> = std::result::Result<T, CompareError>;
