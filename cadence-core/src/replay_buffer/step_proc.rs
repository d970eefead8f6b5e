//! A generic implementation of [`StepProcessor`].
use super::Transition;
use crate::{Env, Step, StepProcessor};
use anyhow::{anyhow, Result};
use std::{default::Default, marker::PhantomData};

/// Configuration of [`SimpleStepProcessor`].
#[derive(Clone, Debug, Default)]
pub struct SimpleStepProcessorConfig {}

/// Produces one [`Transition`] per environment step.
///
/// The processor holds the observation preceding the step. When the step is
/// the last of an episode, the transition takes the true final observation
/// [`Step::obs`] as its next observation, and the held observation is replaced
/// with the first observation of the following episode.
pub struct SimpleStepProcessor<E: Env> {
    prev_obs: Option<E::Obs>,
    phantom: PhantomData<E>,
}

impl<E: Env> StepProcessor<E> for SimpleStepProcessor<E> {
    type Config = SimpleStepProcessorConfig;
    type Output = Transition<E::Obs, E::Act>;

    fn build(_config: &Self::Config) -> Self {
        Self {
            prev_obs: None,
            phantom: PhantomData,
        }
    }

    fn reset(&mut self, init_obs: E::Obs) {
        self.prev_obs = Some(init_obs);
    }

    fn process(&mut self, step: Step<E>) -> Result<Self::Output> {
        let is_done = step.is_done();
        let obs = self
            .prev_obs
            .replace(step.obs.clone())
            .ok_or_else(|| anyhow!("prev_obs is not set. Forgot to call reset()?"))?;

        if is_done {
            self.prev_obs = step.init_obs;
        }

        Ok(Transition {
            obs,
            act: step.act,
            reward: step.reward,
            next_obs: step.obs,
            is_terminated: step.is_terminated,
        })
    }
}
