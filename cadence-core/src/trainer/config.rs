//! Configuration of [`Trainer`](super::Trainer).
use crate::error::CadenceError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Trainer`](super::Trainer).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TrainerConfig {
    /// The total number of environment steps of the run.
    pub timesteps: usize,

    /// The number of initial environment steps taking uniformly random actions.
    pub init_size: usize,

    /// Interval of flushing log entries in environment steps.
    pub log_freq: usize,

    /// Interval of evaluation in environment steps.
    pub eval_freq: usize,

    /// The number of episodes in an evaluation pass.
    pub eval_num_episode: usize,

    /// The number of checkpoints over the run.
    pub checkpoint_num: usize,

    /// Where to save checkpoints.
    pub model_dir: String,

    /// Random seed of the training environment.
    pub seed: i64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            timesteps: 1_000_000,
            init_size: 10_000,
            log_freq: 1000,
            eval_freq: 5000,
            eval_num_episode: 10,
            checkpoint_num: 3,
            model_dir: "model".to_string(),
            seed: 0,
        }
    }
}

impl TrainerConfig {
    /// Sets the total number of environment steps.
    pub fn timesteps(mut self, v: usize) -> Self {
        self.timesteps = v;
        self
    }

    /// Sets the number of warm-up steps with random actions.
    pub fn init_size(mut self, v: usize) -> Self {
        self.init_size = v;
        self
    }

    /// Sets the interval of flushing log entries in environment steps.
    pub fn log_freq(mut self, v: usize) -> Self {
        self.log_freq = v;
        self
    }

    /// Sets the interval of evaluation in environment steps.
    pub fn eval_freq(mut self, v: usize) -> Self {
        self.eval_freq = v;
        self
    }

    /// Sets the number of episodes in an evaluation pass.
    pub fn eval_num_episode(mut self, v: usize) -> Self {
        self.eval_num_episode = v;
        self
    }

    /// Sets the number of checkpoints over the run.
    pub fn checkpoint_num(mut self, v: usize) -> Self {
        self.checkpoint_num = v;
        self
    }

    /// Sets the directory where checkpoints are saved.
    pub fn model_dir(mut self, v: impl Into<String>) -> Self {
        self.model_dir = v.into();
        self
    }

    /// Sets the random seed of the training environment.
    pub fn seed(mut self, v: i64) -> Self {
        self.seed = v;
        self
    }

    /// Checks the consistency of the configuration.
    pub fn validate(&self) -> Result<(), CadenceError> {
        let invalid = |msg: &str| Err(CadenceError::InvalidConfig(msg.to_string()));

        if self.timesteps == 0 {
            return invalid("timesteps must be positive");
        }
        if self.log_freq == 0 {
            return invalid("log_freq must be positive");
        }
        if self.eval_freq == 0 {
            return invalid("eval_freq must be positive");
        }
        if self.checkpoint_num == 0 {
            return invalid("checkpoint_num must be positive");
        }
        Ok(())
    }

    /// Constructs [`TrainerConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TrainerConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
