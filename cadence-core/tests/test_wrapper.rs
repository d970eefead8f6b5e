mod common;
use anyhow::Result;
use cadence_core::{
    wrapper::{Monitor, MonitorConfig, TimeLimit, TimeLimitConfig},
    Env,
};
use common::*;
use test_log::test;

#[test]
fn test_monitor_reports_episodes() -> Result<()> {
    let env = ScriptedEnvConfig::new(&[3]);
    let mut monitor = Monitor::<ScriptedEnv>::build(&env, 0, &MonitorConfig::default())?;
    monitor.reset()?;

    let (_, stats) = monitor.step(&TestAct::Greedy)?;
    assert!(stats.is_none());
    monitor.step(&TestAct::Greedy)?;
    let (step, stats) = monitor.step(&TestAct::Greedy)?;

    assert!(step.is_done());
    assert!(step.init_obs.is_none());
    let stats = stats.expect("episode should be done");
    assert_eq!(stats.episode_return, 3.0);
    assert_eq!(stats.horizon, 3);
    Ok(())
}

#[test]
fn test_monitor_step_with_reset() -> Result<()> {
    let env = ScriptedEnvConfig::new(&[2]);
    let mut monitor = Monitor::<ScriptedEnv>::build(&env, 0, &MonitorConfig::default())?;
    monitor.reset()?;

    let (step, _) = monitor.step_with_reset(&TestAct::Greedy)?;
    assert!(step.init_obs.is_none());
    let (step, stats) = monitor.step_with_reset(&TestAct::Greedy)?;

    assert_eq!(step.obs, TestObs { episode: 0, t: 2 });
    assert_eq!(step.init_obs, Some(TestObs { episode: 1, t: 0 }));
    assert_eq!(stats.map(|s| s.horizon), Some(2));
    assert_eq!(env.resets(), 2);
    Ok(())
}

#[test]
fn test_monitor_rolling_window() -> Result<()> {
    let env = ScriptedEnvConfig::new(&[1, 2, 3, 4]);
    let config = MonitorConfig::default().deque_size(2);
    let mut monitor = Monitor::<ScriptedEnv>::build(&env, 0, &config)?;
    monitor.reset()?;

    for _ in 0..10 {
        monitor.step_with_reset(&TestAct::Greedy)?;
    }

    assert_eq!(monitor.horizon_queue().iter().copied().collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(monitor.return_queue().iter().copied().collect::<Vec<_>>(), vec![3.0, 4.0]);
    Ok(())
}

#[test]
fn test_monitor_reset_discards_unfinished_episode() -> Result<()> {
    let env = ScriptedEnvConfig::new(&[3]);
    let mut monitor = Monitor::<ScriptedEnv>::build(&env, 0, &MonitorConfig::default())?;
    monitor.reset()?;
    monitor.step(&TestAct::Greedy)?;
    monitor.reset()?;

    monitor.step(&TestAct::Greedy)?;
    monitor.step(&TestAct::Greedy)?;
    let (_, stats) = monitor.step(&TestAct::Greedy)?;

    assert_eq!(stats.map(|s| s.horizon), Some(3));
    assert_eq!(monitor.horizon_queue().len(), 1);
    Ok(())
}

#[test]
fn test_time_limit_truncates() -> Result<()> {
    let config = TimeLimitConfig {
        env: ScriptedEnvConfig::new(&[5]),
        max_episode_steps: 3,
    };
    let mut env = TimeLimit::<ScriptedEnv>::build(&config, 0)?;
    assert_eq!(env.max_episode_steps(), 3);
    env.reset()?;

    let step = env.step(&TestAct::Greedy)?;
    assert!(!step.is_done());
    env.step(&TestAct::Greedy)?;
    let step = env.step(&TestAct::Greedy)?;
    assert!(step.is_truncated);
    assert!(!step.is_terminated);

    // The elapsed steps are reset with the environment.
    env.reset()?;
    let step = env.step(&TestAct::Greedy)?;
    assert!(!step.is_done());
    Ok(())
}

#[test]
fn test_time_limit_passes_termination_through() -> Result<()> {
    let config = TimeLimitConfig {
        env: ScriptedEnvConfig::new(&[2]),
        max_episode_steps: 2,
    };
    let mut env = TimeLimit::<ScriptedEnv>::build(&config, 0)?;
    env.reset()?;

    env.step(&TestAct::Greedy)?;
    let step = env.step(&TestAct::Greedy)?;
    assert!(step.is_terminated);
    assert!(step.is_truncated);
    assert!(step.is_done());
    Ok(())
}

#[test]
fn test_monitor_without_window() -> Result<()> {
    let env = ScriptedEnvConfig::new(&[2]);
    let config = MonitorConfig::default().deque_size(0);
    let mut monitor = Monitor::<ScriptedEnv>::build(&env, 0, &config)?;
    monitor.reset()?;

    monitor.step_with_reset(&TestAct::Greedy)?;
    let (_, stats) = monitor.step_with_reset(&TestAct::Greedy)?;

    assert_eq!(stats.map(|s| s.horizon), Some(2));
    assert!(monitor.horizon_queue().is_empty());
    assert!(monitor.return_queue().is_empty());
    Ok(())
}
