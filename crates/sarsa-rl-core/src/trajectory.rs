//! On-policy transitions

use serde::{Deserialize, Serialize};

use crate::{DiscreteAction, DiscreteState};

/// A single SARSA transition: (s, a, r, s', a') plus the terminal flag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// State before the interaction, s_t
    pub state: DiscreteState,
    /// Action taken in `state`, a_t
    pub action: DiscreteAction,
    /// Reward received, r
    pub reward: f64,
    /// State after the interaction, s_{t+1}
    pub next_state: DiscreteState,
    /// Action the current policy selected for `next_state`, a_{t+1}
    pub next_action: DiscreteAction,
    /// Whether the episode ended with this transition
    pub done: bool,
}

impl Transition {
    /// Create a new transition
    #[must_use]
    pub fn new(
        state: usize,
        action: usize,
        reward: f64,
        next_state: usize,
        next_action: usize,
        done: bool,
    ) -> Self {
        Self {
            state: DiscreteState(state),
            action: DiscreteAction(action),
            reward,
            next_state: DiscreteState(next_state),
            next_action: DiscreteAction(next_action),
            done,
        }
    }

    /// Terminal transition; the successor pair is never read
    #[must_use]
    pub fn terminal(state: usize, action: usize, reward: f64) -> Self {
        Self::new(state, action, reward, state, action, true)
    }
}
