//! Cadences of side effects in the training loop.
//!
//! All cadences run over a single timestep index. Logging and evaluation
//! counters advance at every environment step but are consumed only at
//! episode boundaries, so a long episode may cross a period without firing
//! until it ends. Overshoot is kept by reducing the counter modulo its period.
use super::TrainerConfig;
use crate::error::CadenceError;

/// Consumes a countdown counter against its period.
///
/// Returns whether the counter reached the period and the counter after
/// consumption. A fired counter keeps its overshoot, `counter % period`.
/// A zero period never fires.
///
/// ```
/// use cadence_core::consume;
///
/// assert_eq!(consume(0, 50), (false, 0));
/// assert_eq!(consume(50, 50), (true, 0));
/// assert_eq!(consume(60, 50), (true, 10));
/// assert_eq!(consume(60, 0), (false, 60));
/// ```
pub fn consume(counter: usize, period: usize) -> (bool, usize) {
    match counter.checked_rem(period) {
        Some(rem) if counter >= period => (true, rem),
        _ => (false, counter),
    }
}

/// A periodic trigger counting environment steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cadence {
    period: usize,
    togo: usize,
}

impl Cadence {
    /// Creates a cadence firing every `period` steps.
    ///
    /// Fails if `period` is zero.
    pub fn new(period: usize) -> Result<Self, CadenceError> {
        if period == 0 {
            return Err(CadenceError::InvalidConfig(
                "period of a cadence must be positive".to_string(),
            ));
        }
        Ok(Self { period, togo: 0 })
    }

    /// Counts one environment step.
    pub fn tick(&mut self) {
        self.togo += 1;
    }

    /// Fires at most once if the counter has reached the period.
    pub fn fire(&mut self) -> bool {
        let (fires, togo) = consume(self.togo, self.period);
        self.togo = togo;
        fires
    }

    /// Steps counted since the last firing, including overshoot.
    pub fn togo(&self) -> usize {
        self.togo
    }
}

/// Spreads a fixed number of checkpoints over a run.
///
/// The `k`-th checkpoint (0-based) becomes due once `timestep_index + 1`
/// reaches `floor(timesteps * k / (total - 1))`. With `total == 1` no
/// checkpoint is due inside the loop; the single checkpoint is the final one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointSchedule {
    timesteps: usize,
    total: usize,
    count: usize,
}

impl CheckpointSchedule {
    /// Creates a schedule of `total` checkpoints over `timesteps` steps.
    pub fn new(timesteps: usize, total: usize) -> Self {
        Self {
            timesteps,
            total,
            count: 0,
        }
    }

    /// The number of steps after which the next checkpoint is due.
    pub fn threshold(&self) -> Option<usize> {
        if self.total <= 1 || self.count >= self.total {
            return None;
        }
        let t = self.timesteps as u128 * self.count as u128 / (self.total - 1) as u128;
        Some(t as usize)
    }

    /// Checks the schedule at an episode boundary and counts the checkpoint if due.
    pub fn check(&mut self, timestep_index: usize) -> bool {
        match self.threshold() {
            Some(t) if timestep_index + 1 >= t => {
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Counts the checkpoint forced at the end of a run, if the quota is not met.
    pub fn finish(&mut self) -> bool {
        if self.count < self.total {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// The number of checkpoints emitted so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Side effects due at an episode boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpisodeEvents {
    /// Save a checkpoint of the agent.
    pub checkpoint: bool,

    /// Flush the latest log entry.
    pub dump: bool,

    /// Run an evaluation pass.
    pub eval: bool,
}

/// State of the training loop.
///
/// Holds the timestep index, the episode counter and the cadences of the
/// side effects. The scheduler does not touch environments or agents, so
/// the cadence logic can be driven without running episodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    timesteps: usize,
    init_size: usize,
    timestep: usize,
    num_episode: usize,
    dump: Cadence,
    eval: Cadence,
    checkpoint: CheckpointSchedule,
}

impl Scheduler {
    /// Creates the scheduler of a run.
    ///
    /// Fails if the configuration does not pass [`TrainerConfig::validate`].
    pub fn new(config: &TrainerConfig) -> Result<Self, CadenceError> {
        config.validate()?;
        Ok(Self {
            timesteps: config.timesteps,
            init_size: config.init_size,
            timestep: 0,
            num_episode: 0,
            dump: Cadence::new(config.log_freq)?,
            eval: Cadence::new(config.eval_freq)?,
            checkpoint: CheckpointSchedule::new(config.timesteps, config.checkpoint_num),
        })
    }

    /// Returns `true` while the timestep index is below the total number of steps.
    pub fn is_running(&self) -> bool {
        self.timestep < self.timesteps
    }

    /// The current timestep index, 0-based.
    pub fn timestep(&self) -> usize {
        self.timestep
    }

    /// The number of completed episodes.
    pub fn num_episode(&self) -> usize {
        self.num_episode
    }

    /// Returns `true` if the current step takes a random action.
    pub fn is_warmup(&self) -> bool {
        self.timestep < self.init_size
    }

    /// Counts the environment step taken at the current timestep.
    pub fn tick(&mut self) {
        self.dump.tick();
        self.eval.tick();
    }

    /// Counts a completed episode and decides the side effects due.
    pub fn end_episode(&mut self) -> EpisodeEvents {
        self.num_episode += 1;
        EpisodeEvents {
            checkpoint: self.checkpoint.check(self.timestep),
            dump: self.dump.fire(),
            eval: self.eval.fire(),
        }
    }

    /// Moves to the next timestep.
    pub fn advance(&mut self) {
        self.timestep += 1;
    }

    /// Decides if a checkpoint is forced at the end of the run.
    pub fn finish(&mut self) -> bool {
        self.checkpoint.finish()
    }

    /// The number of checkpoints emitted so far.
    pub fn checkpoint_count(&self) -> usize {
        self.checkpoint.count()
    }

    /// The logging cadence.
    pub fn dump(&self) -> &Cadence {
        &self.dump
    }

    /// The evaluation cadence.
    pub fn eval(&self) -> &Cadence {
        &self.eval
    }
}
