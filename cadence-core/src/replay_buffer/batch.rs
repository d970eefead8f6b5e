//! Transitions and batches of transitions.

/// A transition `(o_t, a_t, r_t, o_t+1, terminal_t)`.
///
/// On the last step of an episode `next_obs` is the true final observation
/// of the episode, not the observation after the reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<O, A> {
    /// Observation.
    pub obs: O,

    /// Action.
    pub act: A,

    /// Reward.
    pub reward: f32,

    /// Next observation.
    pub next_obs: O,

    /// Flag denoting if the episode is terminated at this step.
    /// Truncation by a time limit does not set this flag.
    pub is_terminated: bool,
}

/// A batch of transitions sampled from a replay buffer.
#[derive(Debug, Clone, Default)]
pub struct TransitionBatch<O, A> {
    /// Observations.
    pub obs: Vec<O>,

    /// Actions.
    pub act: Vec<A>,

    /// Next observations.
    pub next_obs: Vec<O>,

    /// Rewards.
    pub reward: Vec<f32>,

    /// Termination flags.
    pub is_terminated: Vec<bool>,
}

impl<O, A> TransitionBatch<O, A> {
    /// Returns the number of transitions in the batch.
    pub fn len(&self) -> usize {
        self.reward.len()
    }

    /// Returns `true` if the batch has no transitions.
    pub fn is_empty(&self) -> bool {
        self.reward.is_empty()
    }

    /// Iterates over the transitions as tuples `(o_t, a_t, r_t, o_t+1, terminal_t)`.
    pub fn iter(&self) -> impl Iterator<Item = (&O, &A, f32, &O, bool)> {
        self.obs
            .iter()
            .zip(self.act.iter())
            .zip(self.reward.iter())
            .zip(self.next_obs.iter())
            .zip(self.is_terminated.iter())
            .map(|((((o, a), &r), n), &d)| (o, a, r, n, d))
    }
}

impl<O, A> FromIterator<Transition<O, A>> for TransitionBatch<O, A> {
    fn from_iter<I: IntoIterator<Item = Transition<O, A>>>(iter: I) -> Self {
        let mut batch = Self {
            obs: Vec::new(),
            act: Vec::new(),
            next_obs: Vec::new(),
            reward: Vec::new(),
            is_terminated: Vec::new(),
        };
        for tr in iter {
            batch.obs.push(tr.obs);
            batch.act.push(tr.act);
            batch.next_obs.push(tr.next_obs);
            batch.reward.push(tr.reward);
            batch.is_terminated.push(tr.is_terminated);
        }
        batch
    }
}
