//! Scripted environment and agent shared by the integration tests.
#![allow(dead_code)]
use anyhow::{bail, Result};
use cadence_core::{
    record::Record,
    replay_buffer::{SimpleReplayBuffer, SimpleStepProcessor},
    wrapper::TimeLimit,
    Act, Agent, Env, Obs, Policy, ReplayBufferBase, Step,
};
use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
};

/// Observation `t` steps into episode `episode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestObs {
    pub episode: usize,
    pub t: usize,
}

impl Obs for TestObs {}

/// Action tagged with its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestAct {
    Random,
    Stochastic,
    Greedy,
}

impl Act for TestAct {}

/// Counters shared between a test and the environments it builds.
#[derive(Debug, Default)]
pub struct Counters {
    pub steps: usize,
    pub resets: usize,
    pub random_acts: usize,
}

#[derive(Clone, Debug)]
pub struct ScriptedEnvConfig {
    /// Episode lengths, repeated cyclically.
    pub lens: Vec<usize>,

    /// End episodes by termination instead of truncation.
    pub terminal: bool,

    pub max_episode_steps: usize,

    /// Fail at this step, counted over the life of the environment.
    pub fail_at: Option<usize>,

    pub counters: Rc<RefCell<Counters>>,
}

impl ScriptedEnvConfig {
    pub fn new(lens: &[usize]) -> Self {
        Self {
            lens: lens.to_vec(),
            terminal: true,
            max_episode_steps: usize::MAX,
            fail_at: None,
            counters: Rc::new(RefCell::new(Counters::default())),
        }
    }

    pub fn terminal(mut self, v: bool) -> Self {
        self.terminal = v;
        self
    }

    pub fn max_episode_steps(mut self, v: usize) -> Self {
        self.max_episode_steps = v;
        self
    }

    pub fn fail_at(mut self, v: usize) -> Self {
        self.fail_at = Some(v);
        self
    }

    pub fn steps(&self) -> usize {
        self.counters.borrow().steps
    }

    pub fn resets(&self) -> usize {
        self.counters.borrow().resets
    }

    pub fn random_acts(&self) -> usize {
        self.counters.borrow().random_acts
    }
}

/// Emits reward 1 per step and ends episodes after scripted lengths.
pub struct ScriptedEnv {
    config: ScriptedEnvConfig,
    started: bool,
    episode: usize,
    t: usize,
}

impl ScriptedEnv {
    fn len(&self) -> usize {
        self.config.lens[self.episode % self.config.lens.len()]
    }
}

impl Env for ScriptedEnv {
    type Config = ScriptedEnvConfig;
    type Obs = TestObs;
    type Act = TestAct;

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            started: false,
            episode: 0,
            t: 0,
        })
    }

    fn reset(&mut self) -> Result<TestObs> {
        if self.started {
            self.episode += 1;
        }
        self.started = true;
        self.config.counters.borrow_mut().resets += 1;
        self.t = 0;
        Ok(TestObs {
            episode: self.episode,
            t: 0,
        })
    }

    fn step(&mut self, a: &TestAct) -> Result<Step<Self>> {
        let steps = {
            let mut counters = self.config.counters.borrow_mut();
            counters.steps += 1;
            counters.steps
        };
        if Some(steps) == self.config.fail_at {
            bail!("scripted failure at step {}", steps);
        }

        self.t += 1;
        let obs = TestObs {
            episode: self.episode,
            t: self.t,
        };
        let is_done = self.t >= self.len();
        let is_terminated = is_done && self.config.terminal;
        let is_truncated = is_done && !self.config.terminal;
        Ok(Step::new(obs, *a, 1.0, is_terminated, is_truncated))
    }

    fn sample_act(&mut self) -> TestAct {
        self.config.counters.borrow_mut().random_acts += 1;
        TestAct::Random
    }

    fn max_episode_steps(&self) -> usize {
        self.config.max_episode_steps
    }
}

pub type TestBuffer = SimpleReplayBuffer<TestObs, TestAct>;
pub type TestStepProc = SimpleStepProcessor<ScriptedEnv>;

/// Records every call made by the trainer and the evaluator.
#[derive(Default)]
pub struct TestAgent {
    pub is_train: bool,
    pub stochastic_samples: usize,
    pub greedy_samples: usize,
    /// `(buffer length, episode length)` of each learning step.
    pub learn_calls: Vec<(usize, usize)>,
    pub checkpoints: RefCell<Vec<PathBuf>>,
    pub fail_checkpoint: bool,
}

impl Policy<ScriptedEnv> for TestAgent {
    fn sample(&mut self, _obs: &TestObs) -> TestAct {
        if self.is_train {
            self.stochastic_samples += 1;
            TestAct::Stochastic
        } else {
            self.greedy_samples += 1;
            TestAct::Greedy
        }
    }
}

impl Policy<TimeLimit<ScriptedEnv>> for TestAgent {
    fn sample(&mut self, obs: &TestObs) -> TestAct {
        Policy::<ScriptedEnv>::sample(self, obs)
    }
}

impl Agent<ScriptedEnv, TestBuffer> for TestAgent {
    fn train(&mut self) {
        self.is_train = true;
    }

    fn eval(&mut self) {
        self.is_train = false;
    }

    fn is_train(&self) -> bool {
        self.is_train
    }

    fn learn(&mut self, buffer: &mut TestBuffer, episode_length: usize) -> Result<Record> {
        use cadence_core::ExperienceBufferBase;
        let batch = buffer.batch(4)?;
        self.learn_calls.push((buffer.len(), episode_length));
        Ok(Record::from_scalar("loss", batch.len() as f32 / 8.0))
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        if self.fail_checkpoint {
            bail!("cannot write {:?}", path);
        }
        self.checkpoints.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn load_params(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
