//! Train [`Agent`].
mod cadence;
mod config;
mod sampler;
use crate::{
    record::{EntryKind, LogEntry, Record, RecordValue::Scalar, Recorder},
    wrapper::{Monitor, MonitorConfig},
    Agent, Env, Evaluator, ExperienceBufferBase, ReplayBufferBase, StepProcessor,
};
use anyhow::Result;
pub use cadence::{consume, Cadence, CheckpointSchedule, EpisodeEvents, Scheduler};
pub use config::TrainerConfig;
use log::info;
pub use sampler::Sampler;
use std::{marker::PhantomData, path::Path, time::SystemTime};

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Manages the training loop and its cadences.
///
/// # Training loop
///
/// [`Trainer::train()`] runs exactly `timesteps` environment steps. For the
/// timestep index `i = 0, 1, ...`:
///
/// 1. If `i < init_size`, sample a uniformly random action from the action space
///    of the environment, otherwise sample an action from the agent in training mode.
/// 2. Take an environment step and push one transition into the replay buffer.
///    On the last step of an episode the transition holds the true final
///    observation, not the observation after the reset.
/// 3. Count the step in the logging and evaluation cadences.
/// 4. If the step ends an episode:
///     1. Call [`Agent::learn`] with the replay buffer and the episode length.
///     2. Count the episode and save a checkpoint in `(model_dir)/(episodes)`
///        if the checkpoint schedule is due.
///     3. Build a [`LogEntry`] with the wall time of the update, the step and
///        episode counters, the record returned by the agent, `episode_return`
///        and `episode_horizon`. Store it in the recorder.
///     4. If the logging cadence fires, flush the recorder.
///     5. If the evaluation cadence fires, run the [`Evaluator`] and store its entry.
///
/// When the loop ends with fewer checkpoints than `checkpoint_num`, exactly one
/// more checkpoint is saved. A run whose episodes are longer than the spacing
/// of checkpoints, `timesteps / (checkpoint_num - 1)`, misses scheduled
/// checkpoints inside the loop and ends with fewer than `checkpoint_num`.
/// If no episode ended after the last checkpoint, the final one is saved in
/// the same directory.
///
/// The logging and evaluation cadences are consumed only at episode boundaries
/// and keep their overshoot, see [`consume`].
///
/// # Interaction of objects
///
/// ```mermaid
/// graph LR
///     A[Agent]-->|Env::Act|B[Env]
///     B -->|Env::Obs|A
///     B -->|"Step&lt;E: Env&gt;"|C[StepProcessor]
///     C -->|Transition|D[ReplayBufferBase]
///     D -->|learn|A
///     A -->|Record|F[Recorder]
///     A -->|Policy|G[Evaluator]
///     G -->|Record|F
/// ```
pub struct Trainer<E, P, R>
where
    E: Env,
    P: StepProcessor<E>,
    R: ExperienceBufferBase<Item = P::Output> + ReplayBufferBase,
{
    /// Configuration of the training loop.
    config: TrainerConfig,

    /// Configuration of the environment for training.
    env_config_train: E::Config,

    /// Configuration of the transition producer.
    step_proc_config: P::Config,

    phantom: PhantomData<R>,
}

impl<E, P, R> Trainer<E, P, R>
where
    E: Env,
    P: StepProcessor<E>,
    R: ExperienceBufferBase<Item = P::Output> + ReplayBufferBase,
{
    /// Constructs a trainer.
    ///
    /// Fails if the configuration is inconsistent.
    pub fn build(
        config: TrainerConfig,
        env_config_train: E::Config,
        step_proc_config: P::Config,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            env_config_train,
            step_proc_config,
            phantom: PhantomData,
        })
    }

    /// Returns the configuration of the training loop.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    fn checkpoint<A: Agent<E, R>>(&self, agent: &A, num_episode: usize) -> Result<()> {
        let path = Path::new(&self.config.model_dir).join(num_episode.to_string());
        agent.save_params(&path)?;
        info!("Saved the model in {:?}", &path);
        Ok(())
    }

    /// Runs an evaluation pass and records its entry.
    ///
    /// The agent is switched to evaluation mode during the pass and back to
    /// training mode afterwards. The entry is stored in the recorder and flushed.
    pub fn evaluate<A, D, L>(
        agent: &mut A,
        evaluator: &mut D,
        recorder: &mut L,
        accumulated_trained_timesteps: usize,
        accumulated_trained_episodes: usize,
    ) -> Result<LogEntry>
    where
        A: Agent<E, R>,
        D: Evaluator<E>,
        L: Recorder,
    {
        info!("Starts evaluation of the trained model");
        let timer = SystemTime::now();
        agent.eval();
        let record = evaluator.evaluate(agent);
        agent.train();

        let entry = LogEntry::new(
            EntryKind::Eval,
            timer.elapsed()?.as_secs_f32(),
            accumulated_trained_timesteps,
            accumulated_trained_episodes,
        )
        .with_record(record?);
        recorder.store(entry.clone());
        recorder.flush();

        Ok(entry)
    }

    /// Train the agent.
    ///
    /// Returns the training log entries, one per completed episode, and the
    /// evaluation log entries, one per evaluation pass.
    pub fn train<A, D, L>(
        &mut self,
        agent: &mut A,
        buffer: &mut R,
        recorder: &mut L,
        evaluator: &mut D,
    ) -> Result<(Vec<LogEntry>, Vec<LogEntry>)>
    where
        A: Agent<E, R>,
        D: Evaluator<E>,
        L: Recorder,
    {
        // Only per-episode statistics are read from the training monitor.
        let env = Monitor::<E>::build(
            &self.env_config_train,
            self.config.seed,
            &MonitorConfig::default().deque_size(0),
        )?;
        let producer = P::build(&self.step_proc_config);
        let mut sampler = Sampler::<E, P>::new(env, producer);
        let mut scheduler = Scheduler::new(&self.config)?;
        let mut train_logs = vec![];
        let mut eval_logs = vec![];
        agent.train();

        info!("Starts training for {} timesteps", self.config.timesteps);

        while scheduler.is_running() {
            let i = scheduler.timestep();
            let stats = sampler.sample_and_push(agent, buffer, scheduler.is_warmup())?;
            scheduler.tick();

            if let Some(stats) = stats {
                let timer = SystemTime::now();
                let record = agent.learn(buffer, stats.horizon)?;
                let events = scheduler.end_episode();
                let num_episode = scheduler.num_episode();

                if events.checkpoint {
                    self.checkpoint(agent, num_episode)?;
                }

                let entry = LogEntry::new(
                    EntryKind::Train,
                    timer.elapsed()?.as_secs_f32(),
                    i + 1,
                    num_episode,
                )
                .with_record(record)
                .with_record(Record::from_slice(&[
                    ("episode_return", Scalar(stats.episode_return)),
                    ("episode_horizon", Scalar(stats.horizon as f32)),
                ]));
                recorder.store(entry.clone());
                train_logs.push(entry);

                if events.dump {
                    recorder.flush();
                }

                if events.eval {
                    let entry = Self::evaluate(agent, evaluator, recorder, i + 1, num_episode)?;
                    eval_logs.push(entry);
                }
            }

            scheduler.advance();
        }

        if scheduler.finish() {
            self.checkpoint(agent, scheduler.num_episode())?;
        }

        info!(
            "Finished training: {} timesteps, {} episodes, {} checkpoints",
            scheduler.timestep(),
            scheduler.num_episode(),
            scheduler.checkpoint_count()
        );

        Ok((train_logs, eval_logs))
    }
}
