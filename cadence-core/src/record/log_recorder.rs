use super::{EntryKind, LogEntry, Recorder};
use log::info;

/// Renders flushed entries with [`log::info!`].
///
/// Training entries are framed with a `-` border, evaluation entries with `+`.
pub struct LogRecorder {
    latest: Option<LogEntry>,
    border_len: usize,
}

impl Default for LogRecorder {
    fn default() -> Self {
        Self {
            latest: None,
            border_len: 50,
        }
    }
}

impl LogRecorder {
    /// Sets the length of the border line.
    pub fn border_len(mut self, v: usize) -> Self {
        self.border_len = v;
        self
    }
}

impl Recorder for LogRecorder {
    fn store(&mut self, entry: LogEntry) {
        self.latest = Some(entry);
    }

    fn flush(&mut self) {
        if let Some(entry) = &self.latest {
            let c = match entry.kind {
                EntryKind::Train => "-",
                EntryKind::Eval => "+",
            };
            let border = c.repeat(self.border_len);
            info!("\n{}\n{}\n{}", border, entry, border);
        }
    }
}
