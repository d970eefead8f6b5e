//! Descriptive statistics.
use serde::Serialize;
use std::fmt;

/// Descriptive statistics of a sequence of scalars.
///
/// `std` is the population standard deviation. An empty sequence gives
/// `n == 0` and NaN for the other statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Describe {
    /// The number of values.
    pub n: usize,

    /// Mean.
    pub mean: f32,

    /// Standard deviation.
    pub std: f32,

    /// Minimum.
    pub min: f32,

    /// Maximum.
    pub max: f32,
}

impl Describe {
    /// Computes the statistics of the given values.
    pub fn from_slice(xs: &[f32]) -> Self {
        if xs.is_empty() {
            return Self {
                n: 0,
                mean: f32::NAN,
                std: f32::NAN,
                min: f32::NAN,
                max: f32::NAN,
            };
        }

        let n = xs.len();
        let mean = xs.iter().sum::<f32>() / n as f32;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / n as f32;

        Self {
            n,
            mean,
            std: var.sqrt(),
            min: xs.iter().copied().fold(f32::INFINITY, f32::min),
            max: xs.iter().copied().fold(f32::NEG_INFINITY, f32::max),
        }
    }

    /// Returns `true` if no values were described.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

impl fmt::Display for Describe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "    n: {}\n    mean: {:.4}\n    std: {:.4}\n    min: {:.4}\n    max: {:.4}",
            self.n, self.mean, self.std, self.min, self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let d = Describe::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(d.n, 4);
        assert_eq!(d.mean, 2.5);
        assert!((d.std - 1.118034).abs() < 1e-5);
        assert_eq!(d.min, 1.0);
        assert_eq!(d.max, 4.0);
    }

    #[test]
    fn test_describe_empty() {
        let d = Describe::from_slice(&[]);
        assert!(d.is_empty());
        assert!(d.mean.is_nan() && d.std.is_nan() && d.min.is_nan() && d.max.is_nan());
    }
}
