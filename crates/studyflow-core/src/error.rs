//! Core error types for studyflow-core.
//!
//! This module defines the error hierarchy using thiserror so callers can
//! match on specific failures or bubble everything up as [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Schedule generation errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Handoff channel errors
    #[error("Handoff error: {0}")]
    Handoff(#[from] HandoffError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Schedule generation errors.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// No tasks were supplied; a plan with zero sessions is meaningless
    #[error("cannot generate a schedule from an empty task list")]
    EmptyTaskList,

    /// The configured day start is not a valid HH:MM clock time
    #[error("invalid day start time '{value}': expected HH:MM")]
    InvalidDayStart { value: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Required field is empty
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Empty collection
    #[error("empty collection: {0}")]
    EmptyCollection(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Handoff channel errors.
#[derive(Error, Debug)]
pub enum HandoffError {
    /// The store has no value under the expected key
    #[error("no value stored under key '{key}'")]
    Missing { key: String },

    /// The stored value could not be decoded
    #[error("failed to decode value under key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
