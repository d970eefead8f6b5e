mod common;
use anyhow::Result;
use cadence_core::{
    wrapper::{MonitorConfig, TimeLimit, TimeLimitConfig},
    DefaultEvaluator, Evaluator,
};
use common::*;
use test_log::test;

#[test]
fn test_evaluate_fixed_number_of_episodes() -> Result<()> {
    let env = ScriptedEnvConfig::new(&[2, 4]);
    let mut evaluator = DefaultEvaluator::<ScriptedEnv>::new(&env, 0, 4)?;
    let mut agent = TestAgent::default();

    let record = evaluator.evaluate(&mut agent)?;
    let online_return = record.get_describe("online_return")?;
    let online_horizon = record.get_describe("online_horizon")?;

    assert_eq!(env.steps(), 12);
    assert_eq!(env.resets(), 4);
    assert_eq!(agent.greedy_samples, 12);
    assert_eq!(online_return.n, 4);
    assert_eq!(online_return.mean, 3.0);
    assert_eq!(online_return.std, 1.0);
    assert_eq!(online_return.min, 2.0);
    assert_eq!(online_return.max, 4.0);
    assert_eq!(online_horizon.mean, 3.0);
    Ok(())
}

#[test]
fn test_running_statistics_span_passes() -> Result<()> {
    let env = ScriptedEnvConfig::new(&[1, 2, 3]);
    let monitor_config = MonitorConfig::default().deque_size(4);
    let mut evaluator =
        DefaultEvaluator::<ScriptedEnv>::with_monitor_config(&env, 0, 3, &monitor_config)?;
    let mut agent = TestAgent::default();

    evaluator.evaluate(&mut agent)?;
    let record = evaluator.evaluate(&mut agent)?;

    // Episode lengths 1, 2, 3 then 1, 2, 3; the window keeps the last 4.
    let running = record.get_describe("running_horizon")?;
    assert_eq!(running.n, 4);
    assert_eq!(running.mean, 2.25);
    assert_eq!(record.get_describe("online_horizon")?.n, 3);
    assert_eq!(
        evaluator.env().horizon_queue().iter().copied().collect::<Vec<_>>(),
        vec![3, 1, 2, 3]
    );
    Ok(())
}

#[test]
fn test_unfinished_episodes_are_dropped() -> Result<()> {
    let env = ScriptedEnvConfig::new(&[1000]).max_episode_steps(5);
    let mut evaluator = DefaultEvaluator::<ScriptedEnv>::new(&env, 0, 3)?;
    let mut agent = TestAgent::default();

    let record = evaluator.evaluate(&mut agent)?;
    let online_return = record.get_describe("online_return")?;

    assert_eq!(env.steps(), 15);
    assert_eq!(online_return.n, 0);
    assert!(online_return.is_empty());
    assert!(online_return.mean.is_nan());
    assert_eq!(record.get_describe("running_return")?.n, 0);
    Ok(())
}

#[test]
fn test_only_finished_episodes_are_counted() -> Result<()> {
    let env = ScriptedEnvConfig::new(&[3, 1000, 5]).max_episode_steps(10);
    let mut evaluator = DefaultEvaluator::<ScriptedEnv>::new(&env, 0, 3)?;
    let mut agent = TestAgent::default();

    let record = evaluator.evaluate(&mut agent)?;
    let online_return = record.get_describe("online_return")?;

    assert_eq!(env.steps(), 18);
    assert_eq!(online_return.n, 2);
    assert_eq!(online_return.mean, 4.0);
    Ok(())
}

#[test]
fn test_truncated_episodes_are_counted() -> Result<()> {
    let config = TimeLimitConfig {
        env: ScriptedEnvConfig::new(&[1000]),
        max_episode_steps: 7,
    };
    let mut evaluator = DefaultEvaluator::<TimeLimit<ScriptedEnv>>::new(&config, 0, 2)?;
    let mut agent = TestAgent::default();

    let record = evaluator.evaluate(&mut agent)?;
    let online_horizon = record.get_describe("online_horizon")?;

    assert_eq!(online_horizon.n, 2);
    assert_eq!(online_horizon.mean, 7.0);
    Ok(())
}
