//! Policy abstractions for action selection over a Q-table

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::{ActionSpace, ActionValueFunction, DiscreteAction, DiscreteSpace, DiscreteState};

/// Core policy trait for selecting actions from action values
pub trait Policy {
    /// Select an action for `state` given the current action values
    fn select(
        &self,
        q: &dyn ActionValueFunction,
        state: DiscreteState,
        rng: &mut dyn RngCore,
    ) -> crate::Result<DiscreteAction>;
}

/// Greedy policy that breaks ties uniformly at random
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Policy for Greedy {
    fn select(
        &self,
        q: &dyn ActionValueFunction,
        state: DiscreteState,
        rng: &mut dyn RngCore,
    ) -> crate::Result<DiscreteAction> {
        let ties = q.greedy_actions(state)?;
        ties.choose(rng).copied().ok_or_else(|| {
            crate::RLError::InvalidConfig("action value row is empty".to_string())
        })
    }
}

/// Epsilon-greedy policy
#[derive(Debug, Clone)]
pub struct EpsilonGreedy {
    /// Exploration rate
    epsilon: f64,
    /// Action space for random sampling
    action_space: DiscreteSpace,
}

impl EpsilonGreedy {
    /// Create a new epsilon-greedy policy
    pub fn new(epsilon: f64, action_space: DiscreteSpace) -> crate::Result<Self> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(crate::RLError::InvalidConfig(format!(
                "epsilon must lie in [0, 1], got {epsilon}"
            )));
        }
        Ok(Self {
            epsilon,
            action_space,
        })
    }

    /// Exploration rate
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Policy for EpsilonGreedy {
    fn select(
        &self,
        q: &dyn ActionValueFunction,
        state: DiscreteState,
        rng: &mut dyn RngCore,
    ) -> crate::Result<DiscreteAction> {
        if rng.gen::<f64>() < 1.0 - self.epsilon {
            Greedy.select(q, state, rng)
        } else {
            // Uniform over all actions, the greedy ones included
            Ok(self.action_space.sample(rng))
        }
    }
}
