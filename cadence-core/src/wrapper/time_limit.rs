//! Time limit.
use crate::{Env, Step};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration of [`TimeLimit`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TimeLimitConfig<C> {
    /// Configuration of the wrapped environment.
    pub env: C,

    /// The number of steps after which an episode is truncated.
    pub max_episode_steps: usize,
}

/// Truncates episodes after a fixed number of steps.
///
/// The step reaching the limit has `is_truncated` set; `is_terminated` is
/// passed through from the wrapped environment.
pub struct TimeLimit<E: Env> {
    env: E,
    max_episode_steps: usize,
    elapsed_steps: usize,
}

impl<E: Env> TimeLimit<E> {
    /// Returns a reference to the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.env
    }
}

impl<E: Env> Env for TimeLimit<E> {
    type Config = TimeLimitConfig<E::Config>;
    type Obs = E::Obs;
    type Act = E::Act;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        Ok(Self {
            env: E::build(&config.env, seed)?,
            max_episode_steps: config.max_episode_steps,
            elapsed_steps: 0,
        })
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.elapsed_steps = 0;
        self.env.reset()
    }

    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>> {
        let mut step = self.env.step(a)?.into_env::<Self>();
        self.elapsed_steps += 1;
        if self.elapsed_steps >= self.max_episode_steps {
            step.is_truncated = true;
        }
        Ok(step)
    }

    fn sample_act(&mut self) -> Self::Act {
        self.env.sample_act()
    }

    fn max_episode_steps(&self) -> usize {
        self.max_episode_steps.min(self.env.max_episode_steps())
    }
}
