//! State representations and state spaces

use serde::{Deserialize, Serialize};

/// Trait for defining finite state spaces
pub trait StateSpace: Send + Sync {
    /// Number of states in the space
    fn n(&self) -> usize;

    /// Check if a state is valid within this space
    fn contains(&self, state: DiscreteState) -> bool {
        state.0 < self.n()
    }

    /// Return the state unchanged if it belongs to the space
    fn check(&self, state: DiscreteState) -> crate::Result<DiscreteState> {
        if self.contains(state) {
            Ok(state)
        } else {
            Err(crate::RLError::StateOutOfRange {
                state: state.0,
                n: self.n(),
            })
        }
    }
}

/// Discrete state (observation) index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscreteState(pub usize);

impl DiscreteState {
    /// Index of the state
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for DiscreteState {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Finite state space of `n` indexed states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteStateSpace {
    /// Number of states
    pub n: usize,
}

impl DiscreteStateSpace {
    /// Create a new discrete state space
    pub fn new(n: usize) -> crate::Result<Self> {
        if n == 0 {
            return Err(crate::RLError::InvalidConfig(
                "state space must contain at least one state".to_string(),
            ));
        }
        Ok(Self { n })
    }
}

impl StateSpace for DiscreteStateSpace {
    fn n(&self) -> usize {
        self.n
    }
}
