//! Experience sampling.
use crate::{
    wrapper::{EpisodeStats, Monitor},
    Env, ExperienceBufferBase, Policy, StepProcessor,
};
use anyhow::{bail, Result};

/// Takes environment steps and pushes the resulting transitions into a buffer.
///
/// The sampler owns the training environment and the observation held
/// between steps. Exactly one transition is pushed per environment step.
pub struct Sampler<E, P>
where
    E: Env,
    P: StepProcessor<E>,
{
    env: Monitor<E>,
    prev_obs: Option<E::Obs>,
    step_processor: P,
}

impl<E, P> Sampler<E, P>
where
    E: Env,
    P: StepProcessor<E>,
{
    /// Creates a new sampler with the given environment and step processor.
    pub fn new(env: Monitor<E>, step_processor: P) -> Self {
        Self {
            env,
            prev_obs: None,
            step_processor,
        }
    }

    /// Takes an environment step and pushes a transition into the buffer.
    ///
    /// With `random_act`, the action is sampled uniformly from the action space
    /// instead of being taken from `policy`. Returns the statistics of the
    /// episode if the step ends it.
    pub fn sample_and_push<A, B>(
        &mut self,
        policy: &mut A,
        buffer: &mut B,
        random_act: bool,
    ) -> Result<Option<EpisodeStats>>
    where
        A: Policy<E>,
        B: ExperienceBufferBase<Item = P::Output>,
    {
        let obs = match self.prev_obs.take() {
            Some(obs) => obs,
            None => {
                let obs = self.env.reset()?;
                self.step_processor.reset(obs.clone());
                obs
            }
        };

        let act = match random_act {
            true => self.env.sample_act(),
            false => policy.sample(&obs),
        };
        let (step, stats) = self.env.step_with_reset(&act)?;

        let is_done = step.is_done();
        let next_obs = match (is_done, &step.init_obs) {
            (false, _) => step.obs.clone(),
            (true, Some(init_obs)) => init_obs.clone(),
            (true, None) => bail!("The environment was not reset at the end of an episode"),
        };

        // The step processor picks up the reset observation from the step itself.
        let transition = self.step_processor.process(step)?;
        buffer.push(transition)?;
        self.prev_obs = Some(next_obs);

        Ok(stats)
    }
}
