//! Tabular Q-learning agent.
use crate::env::{ChainAct, ChainObs};
use anyhow::{bail, Result};
use cadence_core::{
    record::{Record, RecordValue},
    replay_buffer::SimpleReplayBuffer,
    Agent, Env, Policy, ReplayBufferBase,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::Path,
};

/// The file holding the Q table in a checkpoint directory.
pub const Q_TABLE_FILE: &str = "q_table.json";

/// Configuration of [`TabularQAgent`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TabularQConfig {
    /// The number of states, rows of the Q table.
    pub n_states: usize,

    /// Step size of Q-learning updates.
    pub learning_rate: f32,

    pub discount_factor: f32,

    /// Probability of a random action in training mode.
    pub epsilon: f32,

    /// The number of transitions in a minibatch.
    pub batch_size: usize,

    pub seed: u64,
}

impl Default for TabularQConfig {
    fn default() -> Self {
        Self {
            n_states: 9,
            learning_rate: 0.1,
            discount_factor: 0.99,
            epsilon: 0.1,
            batch_size: 32,
            seed: 42,
        }
    }
}

impl TabularQConfig {
    /// Sets the number of states.
    pub fn n_states(mut self, v: usize) -> Self {
        self.n_states = v;
        self
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, v: f32) -> Self {
        self.learning_rate = v;
        self
    }

    /// Sets the discount factor.
    pub fn discount_factor(mut self, v: f32) -> Self {
        self.discount_factor = v;
        self
    }

    /// Sets the exploration rate.
    pub fn epsilon(mut self, v: f32) -> Self {
        self.epsilon = v;
        self
    }

    /// Sets the minibatch size.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }
}

#[derive(Serialize, Deserialize)]
struct QTable {
    q: Vec<[f32; ChainAct::N]>,
}

/// Q-learning on a table indexed by [`ChainObs`] and [`ChainAct`].
///
/// In training mode actions are epsilon-greedy with random tie breaking;
/// in evaluation mode the lowest-indexed greedy action is taken.
/// The learning step runs one minibatch update per step of the finished episode.
pub struct TabularQAgent {
    config: TabularQConfig,
    q: Vec<[f32; ChainAct::N]>,
    train: bool,
    n_opts: usize,
    rng: fastrand::Rng,
}

impl TabularQAgent {
    /// Constructs an agent with a zero Q table.
    pub fn build(config: TabularQConfig) -> Self {
        Self {
            q: vec![[0.0; ChainAct::N]; config.n_states],
            rng: fastrand::Rng::with_seed(config.seed),
            train: true,
            n_opts: 0,
            config,
        }
    }

    /// Action values of the given observation.
    pub fn q_values(&self, obs: &ChainObs) -> &[f32; ChainAct::N] {
        &self.q[obs.0]
    }

    fn greedy(&mut self, obs: &ChainObs) -> ChainAct {
        let q = self.q[obs.0];
        let max = q.iter().copied().fold(f32::MIN, f32::max);
        let best: Vec<usize> = (0..ChainAct::N).filter(|&i| q[i] == max).collect();
        // A row of NaN has no maximum; fall back to the first action.
        let ix = match (self.train, best.len()) {
            (_, 0) => 0,
            (true, n) => best[self.rng.usize(..n)],
            (false, _) => best[0],
        };
        ChainAct::from_index(ix)
    }

    /// Applies a Q-learning update and returns the squared TD error.
    fn update(
        &mut self,
        obs: &ChainObs,
        act: &ChainAct,
        reward: f32,
        next_obs: &ChainObs,
        is_terminated: bool,
    ) -> f32 {
        let bootstrap = match is_terminated {
            true => 0.0,
            false => {
                let q = self.q[next_obs.0];
                q.iter().copied().fold(f32::MIN, f32::max)
            }
        };
        let target = reward + self.config.discount_factor * bootstrap;
        let q = &mut self.q[obs.0][act.index()];
        let td = target - *q;
        *q += self.config.learning_rate * td;
        td * td
    }
}

impl<E> Policy<E> for TabularQAgent
where
    E: Env<Obs = ChainObs, Act = ChainAct>,
{
    fn sample(&mut self, obs: &ChainObs) -> ChainAct {
        if self.train && self.rng.f32() < self.config.epsilon {
            ChainAct::from_index(self.rng.usize(..ChainAct::N))
        } else {
            self.greedy(obs)
        }
    }
}

impl<E> Agent<E, SimpleReplayBuffer<ChainObs, ChainAct>> for TabularQAgent
where
    E: Env<Obs = ChainObs, Act = ChainAct>,
{
    fn train(&mut self) {
        self.train = true;
    }

    fn eval(&mut self) {
        self.train = false;
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn learn(
        &mut self,
        buffer: &mut SimpleReplayBuffer<ChainObs, ChainAct>,
        episode_length: usize,
    ) -> Result<Record> {
        let mut loss = 0.0;
        let mut n = 0;

        for _ in 0..episode_length {
            let batch = buffer.batch(self.config.batch_size)?;
            for (obs, act, reward, next_obs, is_terminated) in batch.iter() {
                loss += self.update(obs, act, reward, next_obs, is_terminated);
                n += 1;
            }
            self.n_opts += 1;
        }

        let loss = if n > 0 { loss / n as f32 } else { 0.0 };
        Ok(Record::from_slice(&[
            ("loss", RecordValue::Scalar(loss)),
            ("n_opts", RecordValue::Scalar(self.n_opts as f32)),
        ]))
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        let file = File::create(path.join(Q_TABLE_FILE))?;
        serde_json::to_writer(BufWriter::new(file), &QTable { q: self.q.clone() })?;
        debug!("Saved Q table in {:?}", path);
        Ok(())
    }

    fn load_params(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path.join(Q_TABLE_FILE))?;
        let table: QTable = serde_json::from_reader(BufReader::new(file))?;
        if table.q.len() != self.config.n_states {
            bail!(
                "Q table has {} states, expected {}",
                table.q.len(),
                self.config.n_states
            );
        }
        self.q = table.q;
        Ok(())
    }
}
