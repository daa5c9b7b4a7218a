//! Tabular SARSA agent
//!
//! On-policy temporal difference control over a dense Q-table:
//!
//! ```text
//! Q(s,a) <- Q(s,a) + lr * (r + gamma * Q(s',a') - Q(s,a))
//! ```
//!
//! where `a'` is the action the caller actually chose for `s'`. On terminal
//! transitions the target is the reward alone.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sarsa_rl_core::{
    ActionValueFunction, Agent, DiscreteAction, DiscreteSpace, DiscreteState, DiscreteStateSpace,
    EpsilonGreedy, Greedy, Learning, Policy, QTable, RLError, Result, Transition,
};

use crate::checkpoint::{read_table, write_table, DEFAULT_Q_TABLE_PATH};

/// SARSA-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SarsaConfig {
    /// Number of discrete states (observations)
    pub obs_n: usize,
    /// Number of discrete actions
    pub act_n: usize,
    /// Learning rate, in (0, 1]
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    /// Discount factor, in [0, 1]
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Exploration probability, in [0, 1]
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Seed for the random source; drawn from OS entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// File written by [`SarsaAgent::save`]
    #[serde(default = "default_table_path")]
    pub table_path: PathBuf,
}

fn default_learning_rate() -> f64 {
    0.01
}

fn default_gamma() -> f64 {
    0.9
}

fn default_epsilon() -> f64 {
    0.1
}

fn default_table_path() -> PathBuf {
    PathBuf::from(DEFAULT_Q_TABLE_PATH)
}

impl SarsaConfig {
    /// Configuration with default hyperparameters for the given spaces
    #[must_use]
    pub fn new(obs_n: usize, act_n: usize) -> Self {
        Self {
            obs_n,
            act_n,
            learning_rate: default_learning_rate(),
            gamma: default_gamma(),
            epsilon: default_epsilon(),
            seed: None,
            table_path: default_table_path(),
        }
    }

    /// Set the learning rate
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount factor
    #[must_use]
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the exploration probability
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Seed the random source
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the path used by [`SarsaAgent::save`]
    #[must_use]
    pub fn with_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.table_path = path.into();
        self
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<()> {
        if self.obs_n == 0 {
            return Err(RLError::InvalidConfig("obs_n must be positive".to_string()));
        }
        if self.act_n == 0 {
            return Err(RLError::InvalidConfig("act_n must be positive".to_string()));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(RLError::InvalidConfig(format!(
                "learning_rate must lie in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(RLError::InvalidConfig(format!(
                "gamma must lie in [0, 1], got {}",
                self.gamma
            )));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(RLError::InvalidConfig(format!(
                "epsilon must lie in [0, 1], got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Tabular SARSA agent with epsilon-greedy exploration.
///
/// The random source is a type parameter so tests can inject a seeded
/// generator; ties in [`predict`](Self::predict) and exploration in
/// [`sample`](Self::sample) both draw from it.
#[derive(Debug)]
pub struct SarsaAgent<R = StdRng> {
    config: SarsaConfig,
    q_table: QTable,
    policy: EpsilonGreedy,
    rng: R,
}

impl SarsaAgent<StdRng> {
    /// Create a new agent, seeding from `config.seed` or OS entropy
    pub fn new(config: SarsaConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RngCore> SarsaAgent<R> {
    /// Create a new agent drawing randomness from `rng`
    pub fn with_rng(config: SarsaConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let state_space = DiscreteStateSpace::new(config.obs_n)?;
        let action_space = DiscreteSpace::new(config.act_n)?;
        let policy = EpsilonGreedy::new(config.epsilon, action_space)?;

        debug!(
            obs_n = config.obs_n,
            act_n = config.act_n,
            learning_rate = config.learning_rate,
            gamma = config.gamma,
            epsilon = config.epsilon,
            "Created SARSA agent"
        );

        Ok(Self {
            q_table: QTable::zeros(state_space, action_space),
            policy,
            config,
            rng,
        })
    }

    /// Select an action with epsilon-greedy exploration
    pub fn sample(&mut self, state: usize) -> Result<usize> {
        let action = self
            .policy
            .select(&self.q_table, DiscreteState(state), &mut self.rng)?;
        Ok(action.index())
    }

    /// Select a greedy action, breaking ties uniformly at random
    pub fn predict(&mut self, state: usize) -> Result<usize> {
        let action = Greedy.select(&self.q_table, DiscreteState(state), &mut self.rng)?;
        Ok(action.index())
    }

    /// Apply one SARSA update.
    ///
    /// When `done` is set the successor pair is neither read nor validated.
    pub fn learn(
        &mut self,
        state: usize,
        action: usize,
        reward: f64,
        next_state: usize,
        next_action: usize,
        done: bool,
    ) -> Result<()> {
        let state = DiscreteState(state);
        let action = DiscreteAction(action);

        let predicted = self.q_table.q_value(state, action)?;
        let target = if done {
            reward
        } else {
            let next = self
                .q_table
                .q_value(DiscreteState(next_state), DiscreteAction(next_action))?;
            reward + self.config.gamma * next
        };

        self.q_table.set(
            state,
            action,
            predicted + self.config.learning_rate * (target - predicted),
        )
    }

    /// Apply one SARSA update from a transition record
    pub fn learn_transition(&mut self, transition: &Transition) -> Result<()> {
        self.learn(
            transition.state.index(),
            transition.action.index(),
            transition.reward,
            transition.next_state.index(),
            transition.next_action.index(),
            transition.done,
        )
    }

    /// Save the table to the configured path, overwriting any existing file
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.config.table_path)
    }

    /// Save the table to an explicit path
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_table(path, &self.q_table)?;
        info!(path = %path.display(), shape = ?self.q_table.shape(), "Q-table saved");
        Ok(())
    }

    /// Replace the table with one loaded from `path`.
    ///
    /// The loaded array must match `(obs_n, act_n)`; otherwise the current
    /// table is kept and [`RLError::ShapeMismatch`] is returned.
    pub fn restore(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let values = read_table(path)?;
        self.q_table.replace(values)?;
        info!(path = %path.display(), shape = ?self.q_table.shape(), "Q-table loaded");
        Ok(())
    }

    /// Restore from the configured path
    pub fn restore_default(&mut self) -> Result<()> {
        let path = self.config.table_path.clone();
        self.restore(path)
    }

    /// Current Q-table
    #[must_use]
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Agent configuration
    #[must_use]
    pub fn config(&self) -> &SarsaConfig {
        &self.config
    }

    /// State space of the table
    #[must_use]
    pub fn state_space(&self) -> DiscreteStateSpace {
        self.q_table.state_space()
    }

    /// Action space of the table
    #[must_use]
    pub fn action_space(&self) -> DiscreteSpace {
        self.q_table.action_space()
    }
}

impl<R: RngCore> Agent for SarsaAgent<R> {
    fn sample(&mut self, state: DiscreteState) -> Result<DiscreteAction> {
        SarsaAgent::sample(self, state.index()).map(DiscreteAction)
    }

    fn predict(&mut self, state: DiscreteState) -> Result<DiscreteAction> {
        SarsaAgent::predict(self, state.index()).map(DiscreteAction)
    }

    fn save(&self, path: &Path) -> Result<()> {
        self.save_to(path)
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        self.restore(path)
    }
}

impl<R: RngCore> Learning for SarsaAgent<R> {
    fn learn(&mut self, transition: &Transition) -> Result<()> {
        self.learn_transition(transition)
    }
}
