//! Agent.
use super::{Env, Policy, ReplayBufferBase};
use crate::record::Record;
use anyhow::Result;
use std::path::Path;

/// Represents a trainable policy on an environment.
///
/// The mode of the agent selects how [`Policy::sample`] behaves: in training
/// mode actions are stochastic (exploratory), in evaluation mode they are
/// purely exploitative.
pub trait Agent<E: Env, R: ReplayBufferBase>: Policy<E> {
    /// Set the policy to training mode.
    fn train(&mut self);

    /// Set the policy to evaluation mode.
    fn eval(&mut self);

    /// Return if it is in training mode.
    fn is_train(&self) -> bool;

    /// Performs the learning step at the end of an episode.
    ///
    /// `buffer` is the replay buffer holding every transition recorded so far,
    /// `episode_length` is the horizon of the episode that just finished.
    /// The returned record is merged into the training log entry.
    fn learn(&mut self, buffer: &mut R, episode_length: usize) -> Result<Record>;

    /// Save the parameters of the agent in the given directory.
    ///
    /// Errors are propagated to the caller and abort training.
    fn save_params(&self, path: &Path) -> Result<()>;

    /// Load the parameters of the agent from the given directory.
    fn load_params(&mut self, path: &Path) -> Result<()>;
}
