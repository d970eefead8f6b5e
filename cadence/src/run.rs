//! Builds and runs a training session on [`ChainEnv`].
use crate::{
    agent::TabularQAgent,
    config::RunConfig,
    env::{ChainAct, ChainEnv, ChainObs},
};
use anyhow::Result;
use cadence_core::{
    record::{LogEntry, LogRecorder, Recorder},
    replay_buffer::{SimpleReplayBuffer, SimpleStepProcessor, SimpleStepProcessorConfig},
    wrapper::TimeLimit,
    DefaultEvaluator, ReplayBufferBase, Trainer,
};
use cadence_tensorboard::TensorboardRecorder;
use log::info;
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

pub type Env = TimeLimit<ChainEnv>;
pub type StepProc = SimpleStepProcessor<Env>;
pub type ReplayBuffer = SimpleReplayBuffer<ChainObs, ChainAct>;

pub const TRAIN_LOGS_FILE: &str = "train_logs.json";
pub const EVAL_LOGS_FILE: &str = "eval_logs.json";

/// Logs flushed entries, and also writes them to TensorBoard if requested.
pub fn create_recorder(logdir: &Path, tensorboard: bool) -> Box<dyn Recorder> {
    match tensorboard {
        true => Box::new((LogRecorder::default(), TensorboardRecorder::new(logdir))),
        false => Box::new(LogRecorder::default()),
    }
}

/// Trains a [`TabularQAgent`] and returns the training and evaluation logs.
///
/// A relative `model_dir` is resolved under `logdir`.
pub fn train(
    config: &RunConfig,
    logdir: &Path,
    tensorboard: bool,
) -> Result<(Vec<LogEntry>, Vec<LogEntry>)> {
    config.validate()?;
    fs::create_dir_all(logdir)?;

    let model_dir = logdir.join(&config.trainer.model_dir);
    let trainer_config = config
        .trainer
        .clone()
        .model_dir(model_dir.to_string_lossy());
    let seed = trainer_config.seed;
    let n_episodes = trainer_config.eval_num_episode;

    let mut trainer = Trainer::<Env, StepProc, ReplayBuffer>::build(
        trainer_config,
        config.env.clone(),
        SimpleStepProcessorConfig::default(),
    )?;
    let mut agent = TabularQAgent::build(config.agent.clone());
    let mut buffer = ReplayBuffer::build(&config.replay_buffer);
    let mut recorder = create_recorder(logdir, tensorboard);
    let mut evaluator = DefaultEvaluator::<Env>::with_monitor_config(
        &config.env,
        seed,
        n_episodes,
        &config.monitor,
    )?;

    trainer.train(&mut agent, &mut buffer, &mut recorder, &mut evaluator)
}

/// Writes the logs of a run as JSON arrays.
pub fn write_logs(logdir: &Path, train_logs: &[LogEntry], eval_logs: &[LogEntry]) -> Result<()> {
    for (name, logs) in [(TRAIN_LOGS_FILE, train_logs), (EVAL_LOGS_FILE, eval_logs)] {
        let path = logdir.join(name);
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), logs)?;
        info!("Wrote {} entries in {:?}", logs.len(), path);
    }
    Ok(())
}
