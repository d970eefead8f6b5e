use super::LogEntry;

/// A sink of [`LogEntry`] objects.
///
/// Entries are appended with [`Recorder::store`]; [`Recorder::flush`] writes out
/// the most recently stored entry.
pub trait Recorder {
    /// Appends an entry.
    fn store(&mut self, entry: LogEntry);

    /// Renders the most recently stored entry.
    fn flush(&mut self);
}

impl<T: Recorder + ?Sized> Recorder for Box<T> {
    fn store(&mut self, entry: LogEntry) {
        (**self).store(entry);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

/// Sends every entry to both recorders.
impl<A: Recorder, B: Recorder> Recorder for (A, B) {
    fn store(&mut self, entry: LogEntry) {
        self.0.store(entry.clone());
        self.1.store(entry);
    }

    fn flush(&mut self) {
        self.0.flush();
        self.1.flush();
    }
}
