//! Episode monitor.
use crate::{Env, Step};
use anyhow::Result;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Configuration of [`Monitor`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct MonitorConfig {
    /// The number of recent episodes kept in the rolling windows.
    pub deque_size: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { deque_size: 100 }
    }
}

impl MonitorConfig {
    /// Sets the size of the rolling windows.
    pub fn deque_size(mut self, v: usize) -> Self {
        self.deque_size = v;
        self
    }
}

/// Return and horizon of a completed episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeStats {
    /// Sum of rewards in the episode.
    pub episode_return: f32,

    /// Number of steps in the episode.
    pub horizon: usize,
}

/// Tracks episode statistics of a wrapped environment.
///
/// Completed episodes are reported by [`Monitor::step`] and kept in bounded
/// rolling windows, oldest first.
pub struct Monitor<E: Env> {
    env: E,
    deque_size: usize,
    return_queue: VecDeque<f32>,
    horizon_queue: VecDeque<usize>,
    episode_return: f32,
    horizon: usize,
}

impl<E: Env> Monitor<E> {
    /// Wraps an environment.
    pub fn new(env: E, config: &MonitorConfig) -> Self {
        Self {
            env,
            deque_size: config.deque_size,
            return_queue: VecDeque::with_capacity(config.deque_size),
            horizon_queue: VecDeque::with_capacity(config.deque_size),
            episode_return: 0.0,
            horizon: 0,
        }
    }

    /// Builds the inner environment and wraps it.
    pub fn build(env_config: &E::Config, seed: i64, config: &MonitorConfig) -> Result<Self> {
        Ok(Self::new(E::build(env_config, seed)?, config))
    }

    /// Resets the environment.
    ///
    /// The return and horizon of an unfinished episode are discarded.
    pub fn reset(&mut self) -> Result<E::Obs> {
        self.episode_return = 0.0;
        self.horizon = 0;
        self.env.reset()
    }

    /// Performs an environment step without resetting the environment.
    ///
    /// Returns the statistics of the episode if the step ends it.
    pub fn step(&mut self, act: &E::Act) -> Result<(Step<E>, Option<EpisodeStats>)> {
        let step = self.env.step(act)?;
        self.episode_return += step.reward;
        self.horizon += 1;

        let stats = if step.is_done() {
            let stats = EpisodeStats {
                episode_return: self.episode_return,
                horizon: self.horizon,
            };
            trace!("Episode done: {:?}", stats);
            self.push(stats);
            self.episode_return = 0.0;
            self.horizon = 0;
            Some(stats)
        } else {
            None
        };

        Ok((step, stats))
    }

    /// Performs an environment step and resets the environment if the episode ends.
    ///
    /// See [`Env::step_with_reset`] for the observations in the returned [`Step`].
    pub fn step_with_reset(&mut self, act: &E::Act) -> Result<(Step<E>, Option<EpisodeStats>)> {
        let (mut step, stats) = self.step(act)?;
        if step.is_done() {
            step.init_obs = Some(self.reset()?);
        }
        Ok((step, stats))
    }

    /// Samples an action uniformly from the action space.
    pub fn sample_act(&mut self) -> E::Act {
        self.env.sample_act()
    }

    /// The maximum number of steps in an episode.
    pub fn max_episode_steps(&self) -> usize {
        self.env.max_episode_steps()
    }

    /// Returns of recent episodes.
    pub fn return_queue(&self) -> &VecDeque<f32> {
        &self.return_queue
    }

    /// Horizons of recent episodes.
    pub fn horizon_queue(&self) -> &VecDeque<usize> {
        &self.horizon_queue
    }

    /// Returns a reference to the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.env
    }

    fn push(&mut self, stats: EpisodeStats) {
        if self.deque_size == 0 {
            return;
        }
        if self.return_queue.len() == self.deque_size {
            self.return_queue.pop_front();
            self.horizon_queue.pop_front();
        }
        self.return_queue.push_back(stats.episode_return);
        self.horizon_queue.push_back(stats.horizon);
    }
}
