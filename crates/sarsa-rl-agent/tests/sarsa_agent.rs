use std::path::PathBuf;

use approx::assert_relative_eq;
use ndarray::{array, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sarsa_rl_agent::{write_table, SarsaAgent, SarsaConfig};
use sarsa_rl_core::{
    ActionValueFunction, Agent, DiscreteAction, DiscreteSpace, DiscreteState, DiscreteStateSpace,
    QTable, RLError,
};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use uuid::Uuid;

fn temp_path(ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sarsa-test-{}.{ext}", Uuid::new_v4()))
}

/// Agent whose table is loaded from `values`
fn agent_with_table(values: Array2<f64>, epsilon: f64, seed: u64) -> SarsaAgent {
    let (obs_n, act_n) = values.dim();
    let path = temp_path("npy");
    let table = QTable::from_array(
        values,
        DiscreteStateSpace::new(obs_n).unwrap(),
        DiscreteSpace::new(act_n).unwrap(),
    )
    .unwrap();
    write_table(&path, &table).unwrap();

    let config = SarsaConfig::new(obs_n, act_n).with_epsilon(epsilon);
    let mut agent = SarsaAgent::with_rng(config, StdRng::seed_from_u64(seed)).unwrap();
    agent.restore(&path).unwrap();
    std::fs::remove_file(path).ok();
    agent
}

fn tie_table() -> Array2<f64> {
    array![
        [0.0, 0.0, 0.0, 0.0],
        [1.0, 5.0, 2.0, 5.0],
        [-1.0, -3.0, -0.5, -2.0],
        [7.0, 7.0, 7.0, 6.9],
        [0.2, 0.1, 0.3, 0.3],
    ]
}

#[test]
fn test_predict_returns_row_maximum_and_covers_ties() {
    let values = tie_table();
    let mut agent = agent_with_table(values.clone(), 0.1, 17);

    for s in 0..values.nrows() {
        let row = values.row(s);
        let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let expected: Vec<usize> = (0..row.len()).filter(|&a| row[a] == max).collect();

        let mut seen = vec![false; row.len()];
        for _ in 0..400 {
            let action = agent.predict(s).unwrap();
            assert!(action < row.len());
            assert_eq!(row[action], max, "state {s} action {action}");
            seen[action] = true;
        }

        let chosen: Vec<usize> = (0..row.len()).filter(|&a| seen[a]).collect();
        assert_eq!(chosen, expected, "state {s} tie set not fully covered");
    }
}

#[test]
fn test_sample_without_exploration_is_greedy() {
    let values = tie_table();
    let mut agent = agent_with_table(values.clone(), 0.0, 23);

    for s in 0..values.nrows() {
        let ties = agent
            .q_table()
            .greedy_actions(DiscreteState(s))
            .unwrap();
        for _ in 0..500 {
            let action = agent.sample(s).unwrap();
            assert!(ties.contains(&DiscreteAction(action)));
        }
    }

    // Unique maxima: sample and predict agree exactly
    for _ in 0..100 {
        assert_eq!(agent.sample(2).unwrap(), 2);
        assert_eq!(agent.predict(2).unwrap(), 2);
    }
}

#[test]
fn test_sample_with_full_exploration_is_uniform() {
    let act_n = 4;
    let draws = 20_000;
    // A strongly preferred action must not bias exploration
    let mut values = Array2::zeros((1, act_n));
    values[[0, 1]] = 100.0;
    let mut agent = agent_with_table(values, 1.0, 1234);

    let mut counts = vec![0usize; act_n];
    for _ in 0..draws {
        counts[agent.sample(0).unwrap()] += 1;
    }

    let expected = draws as f64 / act_n as f64;
    let statistic: f64 = counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    let critical = ChiSquared::new((act_n - 1) as f64)
        .unwrap()
        .inverse_cdf(0.999);

    assert!(
        statistic < critical,
        "chi-square {statistic} exceeds {critical}: {counts:?}"
    );
}

#[test]
fn test_example_scenario() {
    let config = SarsaConfig::new(5, 2)
        .with_learning_rate(0.1)
        .with_gamma(0.9)
        .with_seed(0);
    let mut agent = SarsaAgent::new(config).unwrap();

    agent.learn(0, 1, 1.0, 1, 0, false).unwrap();

    let table = agent.q_table().as_array();
    assert_relative_eq!(table[[0, 1]], 0.1);
    assert_eq!(table.iter().filter(|&&v| v != 0.0).count(), 1);
}

#[test]
fn test_save_restore_round_trip() {
    let path = temp_path("npy");
    let config = SarsaConfig::new(6, 3)
        .with_learning_rate(0.3)
        .with_gamma(0.95)
        .with_epsilon(0.2)
        .with_seed(99)
        .with_table_path(&path);
    let mut agent = SarsaAgent::new(config.clone()).unwrap();

    let mut state = 0;
    let mut action = agent.sample(state).unwrap();
    for step in 0..500 {
        let next_state = (state + action + 1) % 6;
        let next_action = agent.sample(next_state).unwrap();
        let reward = if next_state == 5 { 1.0 } else { -0.01 };
        let done = step % 25 == 24;
        agent
            .learn(state, action, reward, next_state, next_action, done)
            .unwrap();
        state = next_state;
        action = next_action;
    }

    agent.save().unwrap();

    let mut fresh = SarsaAgent::new(config).unwrap();
    fresh.restore(&path).unwrap();
    assert_eq!(fresh.q_table().as_array(), agent.q_table().as_array());

    let mut other = SarsaAgent::new(SarsaConfig::new(6, 3).with_table_path(&path)).unwrap();
    other.restore_default().unwrap();
    assert_eq!(other.q_table(), agent.q_table());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_save_overwrites_existing_file() {
    let path = temp_path("npy");
    std::fs::write(&path, vec![0xABu8; 4096]).unwrap();

    let mut agent = SarsaAgent::new(SarsaConfig::new(2, 2).with_learning_rate(1.0).with_seed(1)).unwrap();
    agent.learn(1, 0, 2.5, 0, 0, true).unwrap();
    agent.save_to(&path).unwrap();

    let mut fresh = SarsaAgent::new(SarsaConfig::new(2, 2)).unwrap();
    fresh.restore(&path).unwrap();
    assert_eq!(
        fresh
            .q_table()
            .q_value(DiscreteState(1), DiscreteAction(0))
            .unwrap(),
        2.5
    );

    std::fs::remove_file(path).ok();
}

#[test]
fn test_restore_shape_mismatch_keeps_table() {
    let path = temp_path("npy");
    let mut small = SarsaAgent::new(SarsaConfig::new(3, 2).with_seed(5)).unwrap();
    small.save_to(&path).unwrap();

    let mut agent = SarsaAgent::new(SarsaConfig::new(4, 2).with_learning_rate(1.0)).unwrap();
    agent.learn(3, 1, 9.0, 0, 0, true).unwrap();
    let before = agent.q_table().clone();

    match agent.restore(&path) {
        Err(RLError::ShapeMismatch { expected, actual }) => {
            assert_eq!(expected, (4, 2));
            assert_eq!(actual, (3, 2));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(agent.q_table(), &before);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_restore_missing_file() {
    let mut agent = SarsaAgent::new(SarsaConfig::new(2, 2)).unwrap();

    assert!(matches!(
        agent.restore(temp_path("npy")),
        Err(RLError::NpyRead(_))
    ));
}

#[test]
fn test_agent_trait_round_trip() {
    let path = temp_path("npy");
    let mut agent = SarsaAgent::new(SarsaConfig::new(3, 3).with_learning_rate(0.5).with_seed(8)).unwrap();
    agent.learn(2, 2, 4.0, 0, 0, true).unwrap();

    Agent::save(&agent, &path).unwrap();
    let mut fresh = SarsaAgent::new(SarsaConfig::new(3, 3).with_seed(8)).unwrap();
    Agent::load(&mut fresh, &path).unwrap();

    assert_eq!(
        Agent::predict(&mut fresh, DiscreteState(2)).unwrap(),
        DiscreteAction(2)
    );

    std::fs::remove_file(path).ok();
}

#[test]
fn test_config_json_round_trip() {
    let path = temp_path("json");
    let config = SarsaConfig::new(48, 4)
        .with_learning_rate(0.1)
        .with_gamma(0.95)
        .with_epsilon(0.05)
        .with_seed(2020);

    config.to_json_file(&path).unwrap();
    let loaded = SarsaConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);

    std::fs::write(&path, r#"{"obs_n": 4, "act_n": 2, "gamma": 1.5}"#).unwrap();
    assert!(matches!(
        SarsaConfig::from_json_file(&path),
        Err(RLError::InvalidConfig(_))
    ));

    std::fs::remove_file(path).ok();
}
