use super::{LogEntry, Recorder};

/// Buffered recorder.
///
/// Keeps every stored entry in memory, along with the entries that were
/// current when [`Recorder::flush`] was called.
#[derive(Default)]
pub struct BufferedRecorder {
    buf: Vec<LogEntry>,
    flushed: Vec<usize>,
}

impl BufferedRecorder {
    /// Construct the recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over the stored entries.
    pub fn iter(&self) -> std::slice::Iter<LogEntry> {
        self.buf.iter()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no entry has been stored.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the entries rendered by each flush, in flush order.
    pub fn flushed(&self) -> impl Iterator<Item = &LogEntry> {
        self.flushed.iter().map(move |&ix| &self.buf[ix])
    }

    /// Returns the number of flushes with a stored entry.
    pub fn n_flushes(&self) -> usize {
        self.flushed.len()
    }
}

impl Recorder for BufferedRecorder {
    fn store(&mut self, entry: LogEntry) {
        self.buf.push(entry);
    }

    fn flush(&mut self) {
        if !self.buf.is_empty() {
            self.flushed.push(self.buf.len() - 1);
        }
    }
}
