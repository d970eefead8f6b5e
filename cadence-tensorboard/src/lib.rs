//! Writes log entries of training runs as TensorBoard scalars.
use cadence_core::record::{EntryKind, LogEntry, RecordValue, Recorder};
use log::trace;
use std::path::Path;
use tensorboard_rs::summary_writer::SummaryWriter;

/// Write flushed log entries to TFRecord.
///
/// Every scalar of a flushed entry is written with the number of trained
/// timesteps as its step. Tags are prefixed with `train/` or `eval/`;
/// [`RecordValue::Describe`] values are expanded into `_mean`, `_std`, `_min`
/// and `_max` tags. Other values are ignored.
pub struct TensorboardRecorder {
    writer: SummaryWriter,
    latest: Option<LogEntry>,
}

impl TensorboardRecorder {
    /// Construct a [`TensorboardRecorder`].
    ///
    /// TFRecord will be stored in `logdir`.
    pub fn new<P: AsRef<Path>>(logdir: P) -> Self {
        Self {
            writer: SummaryWriter::new(logdir),
            latest: None,
        }
    }
}

/// Returns the tagged scalars of a log entry.
pub fn scalars(entry: &LogEntry) -> Vec<(String, f32)> {
    let prefix = match entry.kind {
        EntryKind::Train => "train",
        EntryKind::Eval => "eval",
    };
    let tag = |k: &str| format!("{}/{}", prefix, k);

    let mut scalars = vec![
        (tag("num_seconds"), entry.num_seconds),
        (
            tag("accumulated_trained_episodes"),
            entry.accumulated_trained_episodes as f32,
        ),
    ];

    for (k, v) in entry.record.iter() {
        match v {
            RecordValue::Scalar(v) => scalars.push((tag(k), *v)),
            RecordValue::Describe(d) => {
                // Empty statistics have no meaningful value to plot.
                if d.is_empty() {
                    continue;
                }
                scalars.push((tag(&format!("{}_mean", k)), d.mean));
                scalars.push((tag(&format!("{}_std", k)), d.std));
                scalars.push((tag(&format!("{}_min", k)), d.min));
                scalars.push((tag(&format!("{}_max", k)), d.max));
            }
            _ => trace!("Skipped non-scalar value {}", k),
        }
    }

    scalars
}

impl Recorder for TensorboardRecorder {
    fn store(&mut self, entry: LogEntry) {
        self.latest = Some(entry);
    }

    /// Writes the latest entry, once.
    fn flush(&mut self) {
        if let Some(entry) = self.latest.take() {
            let step = entry.accumulated_trained_timesteps;
            for (tag, v) in scalars(&entry) {
                self.writer.add_scalar(&tag, v, step);
            }
            self.writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::record::{Describe, Record};
    use tempdir::TempDir;

    fn eval_entry() -> LogEntry {
        LogEntry::new(EntryKind::Eval, 1.25, 500, 7).with_record(Record::from_slice(&[
            (
                "online_return",
                RecordValue::Describe(Describe::from_slice(&[1.0, 3.0])),
            ),
            (
                "online_horizon",
                RecordValue::Describe(Describe::from_slice(&[])),
            ),
            ("note", RecordValue::String("x".to_string())),
        ]))
    }

    #[test]
    fn test_scalars() {
        let tags: Vec<_> = scalars(&eval_entry()).into_iter().map(|(t, _)| t).collect();
        assert_eq!(
            tags,
            vec![
                "eval/num_seconds",
                "eval/accumulated_trained_episodes",
                "eval/online_return_mean",
                "eval/online_return_std",
                "eval/online_return_min",
                "eval/online_return_max",
            ]
        );

        let entry = LogEntry::new(EntryKind::Train, 0.0, 10, 1)
            .with_record(Record::from_scalar("loss", 0.5));
        let s = scalars(&entry);
        assert_eq!(s[2], ("train/loss".to_string(), 0.5));
    }

    #[test]
    fn test_flush_writes_event_file() {
        let dir = TempDir::new("cadence_tensorboard").unwrap();
        let mut recorder = TensorboardRecorder::new(dir.path());
        recorder.store(eval_entry());
        recorder.flush();
        recorder.flush();

        assert!(recorder.latest.is_none());
        assert!(std::fs::read_dir(dir.path()).unwrap().count() > 0);
    }
}
