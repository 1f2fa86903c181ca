//! Error types for the orbit-squares engine.
//!
//! Every variant is a precondition violation or a settings file problem;
//! nothing here is transient, so callers never retry.

use thiserror::Error;

/// Main error type
#[derive(Error, Debug)]
pub enum SimError {
    /// Uniform sampling bounds are reversed, not finite, or span more than f32 holds
    #[error("invalid sampling range [{low}, {high})")]
    InvalidRange { low: f32, high: f32 },

    /// Zero-avoiding sampler has no valid output for these bounds
    #[error("no value in [-{range}, {range}) avoids (-{tolerance}, {tolerance})")]
    NoValidSample { range: f32, tolerance: f32 },

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings file could not be read or written
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `Settings`
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SimError>;
