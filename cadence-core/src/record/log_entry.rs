//! Log entries produced by training and evaluation.
use super::{Record, RecordValue};
use serde::Serialize;
use std::fmt;

/// Which phase of a run produced a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// One entry per completed training episode.
    Train,

    /// One entry per evaluation pass.
    Eval,
}

/// A log entry with a fixed core and an open extension.
///
/// The core fields are shared by training and evaluation entries.
/// Algorithm-specific metrics and episode statistics live in [`LogEntry::record`].
/// Entries are never modified after they are handed to a [`Recorder`].
///
/// [`Recorder`]: super::Recorder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Phase that produced the entry.
    pub kind: EntryKind,

    /// Wall time of the measured section, in seconds rounded to one decimal.
    pub num_seconds: f32,

    /// Environment steps taken so far.
    pub accumulated_trained_timesteps: usize,

    /// Episodes completed so far.
    pub accumulated_trained_episodes: usize,

    /// Additional values.
    #[serde(flatten)]
    pub record: Record,
}

impl LogEntry {
    /// Creates an entry with an empty extension.
    pub fn new(
        kind: EntryKind,
        num_seconds: f32,
        accumulated_trained_timesteps: usize,
        accumulated_trained_episodes: usize,
    ) -> Self {
        Self {
            kind,
            num_seconds: (num_seconds * 10.0).round() / 10.0,
            accumulated_trained_timesteps,
            accumulated_trained_episodes,
            record: Record::empty(),
        }
    }

    /// Merges `record` into the extension of the entry.
    pub fn with_record(mut self, record: Record) -> Self {
        self.record.merge_inplace(record);
        self
    }

    /// Inserts a value into the extension of the entry.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.record.insert(k, v);
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "num_seconds: {:.1}", self.num_seconds)?;
        writeln!(
            f,
            "accumulated_trained_timesteps: {}",
            self.accumulated_trained_timesteps
        )?;
        write!(
            f,
            "accumulated_trained_episodes: {}",
            self.accumulated_trained_episodes
        )?;
        for (k, v) in self.record.iter() {
            write!(f, "\n{}: {}", k, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_seconds_is_rounded() {
        let entry = LogEntry::new(EntryKind::Train, 1.26, 10, 1);
        assert_eq!(entry.num_seconds, 1.3);
    }

    #[test]
    fn test_display_renders_core_then_extension() {
        let entry = LogEntry::new(EntryKind::Train, 0.0, 60, 3)
            .with_record(Record::from_scalar("episode_return", 2.0));
        let lines: Vec<String> = entry.to_string().lines().map(String::from).collect();

        assert_eq!(
            lines,
            [
                "num_seconds: 0.0",
                "accumulated_trained_timesteps: 60",
                "accumulated_trained_episodes: 3",
                "episode_return: 2",
            ]
        );
    }
}
