//! Environment step.
use super::Env;
use anyhow::Result;

/// Represents an action, observation and reward tuple `(a_t, o_t+1, r_t)`
/// with episode boundary flags.
///
/// An environment emits [`Step`] object at every interaction steps.
/// This object might be used to create transitions `(o_t, a_t, o_t+1, r_t)`.
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation after the action. On the last step of an episode this is
    /// the true final observation.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if episode is terminated (failure or goal).
    pub is_terminated: bool,

    /// Flag denoting if episode is truncated (time limit).
    pub is_truncated: bool,

    /// Initial observation of the next episode, set when the environment
    /// was reset after this step.
    pub init_obs: Option<E::Obs>,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: E::Obs,
        act: E::Act,
        reward: f32,
        is_terminated: bool,
        is_truncated: bool,
    ) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            is_truncated,
            init_obs: None,
        }
    }

    #[inline]
    /// Terminated or truncated, i.e., the last step of an episode.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }

    /// Re-labels the step for an environment sharing observation and action types,
    /// typically a wrapper of `E`.
    pub fn into_env<W>(self) -> Step<W>
    where
        W: Env<Obs = E::Obs, Act = E::Act>,
    {
        Step {
            act: self.act,
            obs: self.obs,
            reward: self.reward,
            is_terminated: self.is_terminated,
            is_truncated: self.is_truncated,
            init_obs: self.init_obs,
        }
    }
}

/// Process [`Step`] and output an item [`Self::Output`].
///
/// This trait is used in [`Trainer`](crate::Trainer). [`Step`] object is transformed to
/// [`Self::Output`], which will be pushed into a replay buffer implementing
/// [`ExperienceBufferBase`](crate::ExperienceBufferBase).
/// The type [`Self::Output`] should be the same with [`ExperienceBufferBase::Item`].
///
/// [`Self::Output`]: StepProcessor::Output
/// [`ExperienceBufferBase::Item`]: crate::ExperienceBufferBase::Item
pub trait StepProcessor<E: Env> {
    /// Configuration.
    type Config: Clone;

    /// The type of transitions produced by this trait.
    type Output;

    /// Build a producer.
    fn build(config: &Self::Config) -> Self;

    /// Resets the object with the first observation of an episode.
    ///
    /// Needed only after a reset made outside of [`Env::step_with_reset`].
    fn reset(&mut self, init_obs: E::Obs);

    /// Processes a [`Step`] object.
    ///
    /// On the last step of an episode, the processor continues with
    /// [`Step::init_obs`].
    fn process(&mut self, step: Step<E>) -> Result<Self::Output>;
}
