//! Tabular SARSA agent
//!
//! This crate provides an on-policy SARSA agent over discrete state and
//! action spaces, with epsilon-greedy exploration, random tie-breaking and
//! Q-table persistence in NumPy `.npy` format.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod checkpoint;
pub mod sarsa;

// Re-export agents
pub use sarsa::{SarsaAgent, SarsaConfig};

// Re-export persistence helpers
pub use checkpoint::{read_table, write_table, DEFAULT_Q_TABLE_PATH};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{SarsaAgent, SarsaConfig};
    pub use sarsa_rl_core::prelude::*;
}
