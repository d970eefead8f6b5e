//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{
    record::{Describe, Record, RecordValue},
    wrapper::{Monitor, MonitorConfig},
    Env, Policy,
};
use anyhow::Result;
use log::debug;

/// Runs a fixed number of fresh episodes on a dedicated environment.
///
/// Each episode is stepped at most [`Env::max_episode_steps`] times. Return
/// and horizon are collected only for episodes that end within this bound;
/// an episode that does not end contributes nothing to the statistics.
///
/// The returned [`Record`] has four [`Describe`] values:
///
/// * `online_return`, `online_horizon`: the episodes of this pass.
/// * `running_return`, `running_horizon`: the rolling windows of the
///   [`Monitor`] wrapping the evaluation environment.
///
/// # Examples
///
/// ```ignore
/// let config = EnvConfig::default();
/// let mut evaluator = DefaultEvaluator::new(&config, 42, 10)?;
///
/// let record = evaluator.evaluate(&mut agent)?;
/// println!("Average return: {}", record.get_describe("online_return")?.mean);
/// ```
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// The environment instance used for evaluation.
    env: Monitor<E>,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    fn evaluate<P: Policy<E>>(&mut self, policy: &mut P) -> Result<Record> {
        let mut returns = vec![];
        let mut horizons = vec![];

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset()?;

            for _ in 0..self.env.max_episode_steps() {
                let act = policy.sample(&prev_obs);
                let (step, stats) = self.env.step(&act)?;
                if step.is_done() {
                    if let Some(stats) = stats {
                        returns.push(stats.episode_return);
                        horizons.push(stats.horizon as f32);
                    }
                    break;
                }
                prev_obs = step.obs;
            }
            debug!("Evaluation episode {} finished", ix);
        }

        let running_horizon: Vec<f32> = self
            .env
            .horizon_queue()
            .iter()
            .map(|&h| h as f32)
            .collect();
        let running_return: Vec<f32> = self.env.return_queue().iter().copied().collect();

        Ok(Record::from_slice(&[
            ("online_return", RecordValue::Describe(Describe::from_slice(&returns))),
            ("online_horizon", RecordValue::Describe(Describe::from_slice(&horizons))),
            ("running_return", RecordValue::Describe(Describe::from_slice(&running_return))),
            ("running_horizon", RecordValue::Describe(Describe::from_slice(&running_horizon))),
        ]))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed for environment initialization
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Self::with_monitor_config(config, seed, n_episodes, &MonitorConfig::default())
    }

    /// Constructs a new [`DefaultEvaluator`] with the given monitor configuration.
    pub fn with_monitor_config(
        config: &E::Config,
        seed: i64,
        n_episodes: usize,
        monitor_config: &MonitorConfig,
    ) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: Monitor::build(config, seed, monitor_config)?,
        })
    }

    /// Returns the monitored evaluation environment.
    pub fn env(&self) -> &Monitor<E> {
        &self.env
    }
}
