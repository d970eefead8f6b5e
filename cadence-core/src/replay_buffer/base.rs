//! Simple generic replay buffer.
use super::{SimpleReplayBufferConfig, Transition, TransitionBatch};
use crate::{ExperienceBufferBase, ReplayBufferBase};
use anyhow::{bail, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A simple generic replay buffer.
///
/// Transitions are kept in a ring of size `capacity`. Batches are sampled
/// uniformly with replacement.
pub struct SimpleReplayBuffer<O, A> {
    capacity: usize,
    i: usize,
    data: Vec<Transition<O, A>>,
    rng: StdRng,
}

impl<O, A> SimpleReplayBuffer<O, A> {
    /// Returns the transition at the given storage index.
    ///
    /// Until the buffer wraps around, storage order equals insertion order.
    pub fn get(&self, ix: usize) -> Option<&Transition<O, A>> {
        self.data.get(ix)
    }

    /// Iterates over the stored transitions in storage order.
    pub fn iter(&self) -> std::slice::Iter<Transition<O, A>> {
        self.data.iter()
    }

    /// Returns the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the buffer has no transitions.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<O, A> ExperienceBufferBase for SimpleReplayBuffer<O, A> {
    type Item = Transition<O, A>;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, tr: Self::Item) -> Result<()> {
        if self.capacity == 0 {
            bail!("Cannot push a transition into a replay buffer of capacity 0");
        }

        if self.data.len() < self.capacity {
            self.data.push(tr);
        } else {
            self.data[self.i] = tr;
        }
        self.i = (self.i + 1) % self.capacity;

        Ok(())
    }
}

impl<O: Clone, A: Clone> ReplayBufferBase for SimpleReplayBuffer<O, A> {
    type Config = SimpleReplayBufferConfig;
    type Batch = TransitionBatch<O, A>;

    fn build(config: &Self::Config) -> Self {
        Self {
            capacity: config.capacity,
            i: 0,
            data: Vec::with_capacity(config.capacity),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    fn batch(&mut self, size: usize) -> Result<Self::Batch> {
        if self.data.is_empty() {
            bail!("Cannot sample a batch from an empty replay buffer");
        }

        let n = self.data.len();
        let batch = (0..size)
            .map(|_| self.data[self.rng.gen_range(0..n)].clone())
            .collect();

        Ok(batch)
    }
}
