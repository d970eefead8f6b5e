//! Types and traits for recording log entries of training and evaluation.
//!
//! # Core Components
//!
//! * [`Record`] - An insertion-ordered container of key-value pairs
//! * [`RecordValue`] - An enum representing the values that can be stored
//! * [`Describe`] - Descriptive statistics of a sequence of scalars
//! * [`LogEntry`] - A typed log entry with a fixed core and a [`Record`] extension
//! * [`Recorder`] - A trait for sinks accumulating and flushing log entries
//! * [`BufferedRecorder`] - A recorder that keeps entries in memory
//! * [`LogRecorder`] - A recorder that renders flushed entries with the `log` crate
//! * [`NullRecorder`] - A recorder that discards all entries
//!
//! # Basic Usage
//!
//! ```rust
//! use cadence_core::record::{Describe, Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("loss", RecordValue::Scalar(0.25));
//! record.insert("returns", RecordValue::Describe(Describe::from_slice(&[1.0, 2.0, 3.0])));
//!
//! assert_eq!(record.get_scalar("loss").unwrap(), 0.25);
//! ```
mod base;
mod buffered_recorder;
mod describe;
mod log_entry;
mod log_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use describe::Describe;
pub use log_entry::{EntryKind, LogEntry};
pub use log_recorder::LogRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
