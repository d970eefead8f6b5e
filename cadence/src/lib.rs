//! Training runs of a tabular Q-learning agent on a corridor environment.
//!
//! The crate wires the engine of [cadence-core](cadence_core) into a runnable
//! program, `cadence-train`:
//!
//! * [`ChainEnv`] is a 1-D corridor terminating at both ends and rewarded at
//!   the right end. Runs wrap it with
//!   [`TimeLimit`](cadence_core::wrapper::TimeLimit).
//! * [`TabularQAgent`] is epsilon-greedy in training mode, greedy in evaluation
//!   mode, and learns from minibatches of the replay buffer at the end of each
//!   episode.
//! * [`RunConfig`] gathers the configurations of a run and is read from YAML.
//! * [`run::train`] builds everything from a [`RunConfig`] and runs the
//!   [`Trainer`](cadence_core::Trainer); [`run::write_logs`] dumps the returned
//!   logs as JSON.
pub mod agent;
pub mod config;
pub mod env;
pub mod run;

pub use agent::{TabularQAgent, TabularQConfig};
pub use config::RunConfig;
pub use env::{ChainAct, ChainEnv, ChainEnvConfig, ChainObs};
