//! Core traits and types for tabular reinforcement learning
//!
//! This crate provides the discrete spaces, the dense Q-table, the action
//! selection policies and the agent traits shared by tabular agents.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod agent;
pub mod error;
pub mod policy;
pub mod state;
pub mod trajectory;
pub mod value;

// Re-export core traits and types
pub use action::{ActionSpace, DiscreteAction, DiscreteSpace};
pub use agent::{Agent, Learning};
pub use error::{RLError, Result};
pub use policy::{EpsilonGreedy, Greedy, Policy};
pub use state::{DiscreteState, DiscreteStateSpace, StateSpace};
pub use trajectory::Transition;
pub use value::{ActionValueFunction, QTable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ActionSpace, ActionValueFunction, Agent, DiscreteAction, DiscreteSpace, DiscreteState,
        DiscreteStateSpace, Learning, Policy, QTable, Result, StateSpace, Transition,
    };
}
