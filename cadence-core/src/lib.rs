#![warn(missing_docs)]
//! The control loop of reinforcement learning training runs.
//!
//! [`Trainer`] drives an [`Agent`] on an [`Env`], records one transition per
//! environment step into a replay buffer, calls the learning step of the agent
//! at the end of every episode, and interleaves checkpoints, log flushes and
//! evaluation passes by [`Evaluator`] at independent cadences.
pub mod error;
pub mod evaluator;
pub mod record;
pub mod replay_buffer;
pub mod wrapper;

mod base;
pub use base::{
    Act, Agent, Env, ExperienceBufferBase, Obs, Policy, ReplayBufferBase, Step, StepProcessor,
};
pub use evaluator::{DefaultEvaluator, Evaluator};

mod trainer;
pub use trainer::{
    consume, Cadence, CheckpointSchedule, EpisodeEvents, Sampler, Scheduler, Trainer,
    TrainerConfig,
};
