//! Error types for the RL core library

use thiserror::Error;

/// Core error type for RL operations
#[derive(Error, Debug)]
pub enum RLError {
    /// Invalid agent or space configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// State index outside the state space
    #[error("State {state} out of range for state space of size {n}")]
    StateOutOfRange { state: usize, n: usize },

    /// Action index outside the action space
    #[error("Action {action} out of range for action space of size {n}")]
    ActionOutOfRange { action: usize, n: usize },

    /// Table dimensions do not match the configured spaces
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Failed to write a table in `.npy` format
    #[error("Failed to write .npy table: {0}")]
    NpyWrite(#[from] ndarray_npy::WriteNpyError),

    /// Failed to read a table in `.npy` format
    #[error("Failed to read .npy table: {0}")]
    NpyRead(#[from] ndarray_npy::ReadNpyError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for RL operations
pub type Result<T> = std::result::Result<T, RLError>;
