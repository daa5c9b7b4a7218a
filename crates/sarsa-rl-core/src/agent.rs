//! Agent traits

use std::path::Path;

use crate::{DiscreteAction, DiscreteState, Transition};

/// Core agent trait
pub trait Agent {
    /// Select an action with exploration
    fn sample(&mut self, state: DiscreteState) -> crate::Result<DiscreteAction>;

    /// Select the best known action without exploration
    fn predict(&mut self, state: DiscreteState) -> crate::Result<DiscreteAction>;

    /// Save the agent's learned values
    fn save(&self, path: &Path) -> crate::Result<()>;

    /// Load previously saved values, replacing the current ones
    fn load(&mut self, path: &Path) -> crate::Result<()>;
}

/// Trait for agents that can learn from transitions
pub trait Learning: Agent {
    /// Apply a single update from one transition
    fn learn(&mut self, transition: &Transition) -> crate::Result<()>;

    /// Apply updates for a sequence of transitions in order
    fn learn_all<'a, I>(&mut self, transitions: I) -> crate::Result<()>
    where
        I: IntoIterator<Item = &'a Transition>,
    {
        for transition in transitions {
            self.learn(transition)?;
        }
        Ok(())
    }
}
