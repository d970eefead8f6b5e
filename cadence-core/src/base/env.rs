//! Environment.
use super::{Act, Obs, Step};
use anyhow::Result;

/// Represents an environment, typically an MDP.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performes an environment step.
    ///
    /// The environment is not reset when the episode ends.
    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized;

    /// Performes an environment step and resets the environment if the episode ends.
    ///
    /// On the last step of an episode, [`Step::obs`] keeps the true final
    /// observation while the observation after the reset is stored in
    /// [`Step::init_obs`].
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized,
    {
        let mut step = self.step(a)?;
        if step.is_done() {
            step.init_obs = Some(self.reset()?);
        }
        Ok(step)
    }

    /// Samples an action uniformly from the action space.
    fn sample_act(&mut self) -> Self::Act;

    /// The maximum number of steps in an episode.
    fn max_episode_steps(&self) -> usize;
}
