//! A generic implementation of replay buffer.
//!
//! * [`SimpleStepProcessor`] turns every environment [`Step`](crate::Step) into one
//!   [`Transition`].
//! * [`SimpleReplayBuffer`] stores transitions in a ring bounded by its capacity
//!   and samples [`TransitionBatch`]es uniformly.
mod base;
mod batch;
mod config;
mod step_proc;
pub use base::SimpleReplayBuffer;
pub use batch::{Transition, TransitionBatch};
pub use config::SimpleReplayBufferConfig;
pub use step_proc::{SimpleStepProcessor, SimpleStepProcessorConfig};
