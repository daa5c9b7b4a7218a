//! Action value functions for tabular RL algorithms

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::{ActionSpace, DiscreteAction, DiscreteSpace, DiscreteState, DiscreteStateSpace, StateSpace};

/// Action value function Q(s, a) over discrete spaces
pub trait ActionValueFunction {
    /// Estimate the value of taking an action in a given state
    fn q_value(&self, state: DiscreteState, action: DiscreteAction) -> crate::Result<f64>;

    /// Get Q-values for all actions of a state
    fn q_values(&self, state: DiscreteState) -> crate::Result<ArrayView1<'_, f64>>;

    /// Every action whose value equals the row maximum.
    ///
    /// Equality is exact. NaN entries never attain the maximum; a row made
    /// only of NaN yields every action.
    fn greedy_actions(&self, state: DiscreteState) -> crate::Result<Vec<DiscreteAction>> {
        let row = self.q_values(state)?;
        let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let ties: Vec<DiscreteAction> = row
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == max)
            .map(|(i, _)| DiscreteAction(i))
            .collect();

        if ties.is_empty() {
            Ok((0..row.len()).map(DiscreteAction).collect())
        } else {
            Ok(ties)
        }
    }
}

/// Dense Q-table of shape `(num_states, num_actions)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    values: Array2<f64>,
    state_space: DiscreteStateSpace,
    action_space: DiscreteSpace,
}

impl QTable {
    /// Create a zero-initialised table
    #[must_use]
    pub fn zeros(state_space: DiscreteStateSpace, action_space: DiscreteSpace) -> Self {
        Self {
            values: Array2::zeros((state_space.n, action_space.n)),
            state_space,
            action_space,
        }
    }

    /// Wrap an existing array, checking it against the spaces
    pub fn from_array(
        values: Array2<f64>,
        state_space: DiscreteStateSpace,
        action_space: DiscreteSpace,
    ) -> crate::Result<Self> {
        check_shape(&values, (state_space.n, action_space.n))?;
        Ok(Self {
            values,
            state_space,
            action_space,
        })
    }

    /// Replace every value at once.
    ///
    /// On a shape mismatch the current values are kept.
    pub fn replace(&mut self, values: Array2<f64>) -> crate::Result<()> {
        check_shape(&values, self.shape())?;
        self.values = values;
        Ok(())
    }

    /// Set the value of a state-action pair
    pub fn set(&mut self, state: DiscreteState, action: DiscreteAction, value: f64) -> crate::Result<()> {
        let (s, a) = self.index(state, action)?;
        self.values[[s, a]] = value;
        Ok(())
    }

    /// Table dimensions as `(num_states, num_actions)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// State space the table is defined over
    #[must_use]
    pub fn state_space(&self) -> DiscreteStateSpace {
        self.state_space
    }

    /// Action space the table is defined over
    #[must_use]
    pub fn action_space(&self) -> DiscreteSpace {
        self.action_space
    }

    /// Borrow the underlying array
    #[must_use]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }

    /// Consume the table, returning the underlying array
    #[must_use]
    pub fn into_array(self) -> Array2<f64> {
        self.values
    }

    fn index(&self, state: DiscreteState, action: DiscreteAction) -> crate::Result<(usize, usize)> {
        let state = self.state_space.check(state)?;
        let action = self.action_space.check(action)?;
        Ok((state.0, action.0))
    }
}

impl ActionValueFunction for QTable {
    fn q_value(&self, state: DiscreteState, action: DiscreteAction) -> crate::Result<f64> {
        let (s, a) = self.index(state, action)?;
        Ok(self.values[[s, a]])
    }

    fn q_values(&self, state: DiscreteState) -> crate::Result<ArrayView1<'_, f64>> {
        let state = self.state_space.check(state)?;
        Ok(self.values.row(state.0))
    }
}

fn check_shape(values: &Array2<f64>, expected: (usize, usize)) -> crate::Result<()> {
    let actual = values.dim();
    if actual != expected {
        return Err(crate::RLError::ShapeMismatch { expected, actual });
    }
    Ok(())
}
