//! Action representations and action spaces

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Trait for defining finite action spaces
pub trait ActionSpace: Send + Sync {
    /// Number of actions in the space
    fn n(&self) -> usize;

    /// Sample an action uniformly at random from the space
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DiscreteAction;

    /// Check if an action is valid within this space
    fn contains(&self, action: DiscreteAction) -> bool {
        action.0 < self.n()
    }

    /// Return the action unchanged if it belongs to the space
    fn check(&self, action: DiscreteAction) -> crate::Result<DiscreteAction> {
        if self.contains(action) {
            Ok(action)
        } else {
            Err(crate::RLError::ActionOutOfRange {
                action: action.0,
                n: self.n(),
            })
        }
    }
}

/// Discrete action, an index into the action space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscreteAction(pub usize);

impl DiscreteAction {
    /// Index of the action
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for DiscreteAction {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Discrete action space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteSpace {
    /// Number of discrete actions
    pub n: usize,
}

impl DiscreteSpace {
    /// Create a new discrete action space
    pub fn new(n: usize) -> crate::Result<Self> {
        if n == 0 {
            return Err(crate::RLError::InvalidConfig(
                "action space must contain at least one action".to_string(),
            ));
        }
        Ok(Self { n })
    }
}

impl ActionSpace for DiscreteSpace {
    fn n(&self) -> usize {
        self.n
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DiscreteAction {
        DiscreteAction(rng.gen_range(0..self.n))
    }
}
