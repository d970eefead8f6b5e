//! Configuration of a training run.
use crate::{agent::TabularQConfig, env::ChainEnvConfig};
use anyhow::{bail, Result};
use cadence_core::{
    replay_buffer::SimpleReplayBufferConfig,
    wrapper::{MonitorConfig, TimeLimitConfig},
    TrainerConfig,
};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Everything a run of `cadence-train` is built from.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct RunConfig {
    pub trainer: TrainerConfig,
    pub replay_buffer: SimpleReplayBufferConfig,
    /// Monitor of the evaluation environment.
    pub monitor: MonitorConfig,
    pub env: TimeLimitConfig<ChainEnvConfig>,
    pub agent: TabularQConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trainer: TrainerConfig::default()
                .timesteps(20_000)
                .init_size(500)
                .log_freq(1000)
                .eval_freq(2000)
                .eval_num_episode(10)
                .checkpoint_num(3),
            replay_buffer: SimpleReplayBufferConfig::default().capacity(10_000),
            monitor: MonitorConfig::default(),
            env: TimeLimitConfig {
                env: ChainEnvConfig::default(),
                max_episode_steps: 50,
            },
            agent: TabularQConfig::default(),
        }
    }
}

impl RunConfig {
    /// Sets the random seed of the environments, the replay buffer and the agent.
    pub fn seed(mut self, v: i64) -> Self {
        self.trainer.seed = v;
        self.replay_buffer.seed = v as u64;
        self.agent.seed = v as u64;
        self
    }

    /// Checks the consistency of the configuration.
    pub fn validate(&self) -> Result<()> {
        self.trainer.validate()?;
        if self.env.env.n_states != self.agent.n_states {
            bail!(
                "The environment has {} states but the agent has {}",
                self.env.env.n_states,
                self.agent.n_states
            );
        }
        if !self.env.env.reward.is_finite() {
            bail!("reward must be finite, got {}", self.env.env.reward);
        }
        let agent = &self.agent;
        for (name, v) in [
            ("learning_rate", agent.learning_rate),
            ("discount_factor", agent.discount_factor),
            ("epsilon", agent.epsilon),
        ] {
            if !v.is_finite() {
                bail!("{} must be finite, got {}", name, v);
            }
        }
        if self.agent.batch_size == 0 {
            bail!("batch_size must be positive");
        }
        Ok(())
    }

    /// Constructs [`RunConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`RunConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
