//! A corridor environment with discrete moves.
use anyhow::{bail, Result};
use cadence_core::{Act, Env, Obs, Step};
use serde::{Deserialize, Serialize};

/// Position in the corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainObs(pub usize);

impl Obs for ChainObs {}

/// Move to a neighboring cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainAct {
    Left,
    Right,
}

impl Act for ChainAct {}

impl ChainAct {
    /// The number of actions.
    pub const N: usize = 2;

    /// Index of the action in a Q table row.
    pub fn index(&self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// Action of the given index; indices other than 0 move right.
    pub fn from_index(ix: usize) -> Self {
        match ix {
            0 => Self::Left,
            _ => Self::Right,
        }
    }
}

/// Configuration of [`ChainEnv`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ChainEnvConfig {
    /// The number of cells, including both ends.
    pub n_states: usize,

    /// Reward for reaching the right end.
    pub reward: f32,
}

impl Default for ChainEnvConfig {
    fn default() -> Self {
        Self {
            n_states: 9,
            reward: 1.0,
        }
    }
}

impl ChainEnvConfig {
    /// Sets the number of cells.
    pub fn n_states(mut self, v: usize) -> Self {
        self.n_states = v;
        self
    }

    /// Sets the reward at the right end.
    pub fn reward(mut self, v: f32) -> Self {
        self.reward = v;
        self
    }
}

/// A 1-D corridor.
///
/// Episodes start in the middle cell and terminate at either end. Only the
/// right end is rewarded. Episodes never truncate on their own; wrap the
/// environment with [`TimeLimit`](cadence_core::wrapper::TimeLimit) to bound them.
pub struct ChainEnv {
    n_states: usize,
    reward: f32,
    pos: usize,
    rng: fastrand::Rng,
}

impl ChainEnv {
    fn start(&self) -> usize {
        self.n_states / 2
    }
}

impl Env for ChainEnv {
    type Config = ChainEnvConfig;
    type Obs = ChainObs;
    type Act = ChainAct;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        if config.n_states < 3 {
            bail!("A chain needs at least 3 states, got {}", config.n_states);
        }
        let mut env = Self {
            n_states: config.n_states,
            reward: config.reward,
            pos: 0,
            rng: fastrand::Rng::with_seed(seed as u64),
        };
        env.pos = env.start();
        Ok(env)
    }

    fn reset(&mut self) -> Result<ChainObs> {
        self.pos = self.start();
        Ok(ChainObs(self.pos))
    }

    fn step(&mut self, a: &ChainAct) -> Result<Step<Self>> {
        self.pos = match a {
            ChainAct::Left => self.pos.saturating_sub(1),
            ChainAct::Right => (self.pos + 1).min(self.n_states - 1),
        };
        let is_left_end = self.pos == 0;
        let is_right_end = self.pos == self.n_states - 1;
        let reward = if is_right_end { self.reward } else { 0.0 };

        Ok(Step::new(
            ChainObs(self.pos),
            *a,
            reward,
            is_left_end || is_right_end,
            false,
        ))
    }

    fn sample_act(&mut self) -> ChainAct {
        ChainAct::from_index(self.rng.usize(..ChainAct::N))
    }

    fn max_episode_steps(&self) -> usize {
        usize::MAX
    }
}
