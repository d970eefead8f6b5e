//! Base implementation of records for logging.
use super::Describe;
use crate::error::CadenceError;
use serde::{Serialize, Serializer};
use std::{fmt, slice::Iter};

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// A single floating-point value, typically used for metrics like loss.
    Scalar(f32),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),

    /// A text value.
    String(String),

    /// Descriptive statistics of a sequence of scalars.
    Describe(Describe),
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{}", v),
            Self::Array1(v) => write!(f, "{:?}", v),
            Self::String(s) => write!(f, "{}", s),
            Self::Describe(d) => write!(f, "\n{}", d),
        }
    }
}

/// An insertion-ordered container of key-value pairs.
///
/// Inserting an existing key replaces its value in place, keeping the
/// position of the key.
///
/// # Examples
///
/// ```rust
/// use cadence_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("loss", 0.5);
/// record.insert("accuracy", RecordValue::Scalar(0.95));
/// record.insert("loss", RecordValue::Scalar(0.4));
///
/// let keys: Vec<_> = record.keys().collect();
/// assert_eq!(keys, ["loss", "accuracy"]);
/// assert_eq!(record.get_scalar("loss").unwrap(), 0.4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(Vec<(String, RecordValue)>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(vec![(name.into(), RecordValue::Scalar(value))])
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        let mut record = Self::empty();
        for (k, v) in s.iter() {
            record.insert(k.clone(), v.clone());
        }
        record
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        let k = k.into();
        match self.0.iter_mut().find(|(key, _)| *key == k) {
            Some((_, value)) => *value = v,
            None => self.0.push((k, v)),
        }
    }

    /// Returns an iterator over the key-value pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, (String, RecordValue)> {
        self.0.iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.iter().find(|(key, _)| key == k).map(|(_, v)| v)
    }

    /// Merges two records, consuming both.
    ///
    /// If both records contain the same key, the value from the second record
    /// will overwrite the value from the first record.
    pub fn merge(mut self, record: Record) -> Self {
        self.merge_inplace(record);
        self
    }

    /// Merges another record into this one in place.
    pub fn merge_inplace(&mut self, record: Record) {
        for (k, v) in record.0.into_iter() {
            self.insert(k, v);
        }
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f32, CadenceError> {
        match self.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(CadenceError::RecordValueTypeError("Scalar".to_string())),
            None => Err(CadenceError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, CadenceError> {
        match self.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(CadenceError::RecordValueTypeError("Array1".to_string())),
            None => Err(CadenceError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, CadenceError> {
        match self.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(CadenceError::RecordValueTypeError("String".to_string())),
            None => Err(CadenceError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets descriptive statistics from the record.
    pub fn get_describe(&self, k: &str) -> Result<Describe, CadenceError> {
        match self.get(k) {
            Some(RecordValue::Describe(d)) => Ok(d.clone()),
            Some(_) => Err(CadenceError::RecordValueTypeError("Describe".to_string())),
            None => Err(CadenceError::RecordKeyError(k.to_string())),
        }
    }

    /// Returns the number of key-value pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_replaces() {
        let mut record = Record::empty();
        record.insert("b", RecordValue::Scalar(1.0));
        record.insert("a", RecordValue::String("x".to_string()));
        record.insert("b", RecordValue::Scalar(2.0));

        assert_eq!(record.len(), 2);
        assert_eq!(record.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(record.get_scalar("b").unwrap(), 2.0);
    }

    #[test]
    fn test_merge_overwrites_with_second() {
        let r1 = Record::from_slice(&[
            ("x", RecordValue::Scalar(1.0)),
            ("y", RecordValue::Scalar(2.0)),
        ]);
        let r2 = Record::from_slice(&[
            ("y", RecordValue::Scalar(3.0)),
            ("z", RecordValue::Array1(vec![1.0, 2.0])),
        ]);
        let r = r1.merge(r2);

        assert_eq!(r.keys().collect::<Vec<_>>(), ["x", "y", "z"]);
        assert_eq!(r.get_scalar("y").unwrap(), 3.0);
        assert_eq!(r.get_array1("z").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_typed_getters_report_errors() {
        let record = Record::from_scalar("loss", 0.5);

        assert!(matches!(
            record.get_string("loss"),
            Err(CadenceError::RecordValueTypeError(_))
        ));
        assert!(matches!(
            record.get_scalar("missing"),
            Err(CadenceError::RecordKeyError(k)) if k == "missing"
        ));
    }
}
