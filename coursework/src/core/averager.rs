//! Running arithmetic mean with range-checked inputs.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AverageError {
    #[error("invalid bounds: min {min} exceeds max {max}")]
    InvalidBounds { min: f64, max: f64 },
    #[error("value {0} is not a finite number")]
    NotFinite(f64),
    #[error("value {value} is below the minimum allowed {min}")]
    BelowMin { value: f64, min: f64 },
    #[error("value {value} is above the maximum allowed {max}")]
    AboveMax { value: f64, max: f64 },
    #[error("cannot average without any values")]
    Empty,
}

/// Accumulates values across calls to [`Averager::add`].
///
/// Every value of a batch is validated before any of them is accumulated, so
/// a rejected batch leaves the running state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Averager {
    min: Option<f64>,
    max: Option<f64>,
    total: f64,
    count: u64,
}

impl Averager {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, AverageError> {
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err(AverageError::InvalidBounds { min, max });
        }
        Ok(Self {
            min,
            max,
            total: 0.0,
            count: 0,
        })
    }

    /// Accumulate `values` and return the mean of everything added so far.
    pub fn add(&mut self, values: &[f64]) -> Result<f64, AverageError> {
        for &value in values {
            self.check(value)?;
        }
        for &value in values {
            self.total += value;
            self.count += 1;
        }
        self.average().ok_or(AverageError::Empty)
    }

    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.total / self.count as f64)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    fn check(&self, value: f64) -> Result<(), AverageError> {
        if !value.is_finite() {
            return Err(AverageError::NotFinite(value));
        }
        if let Some(min) = self.min
            && value < min
        {
            return Err(AverageError::BelowMin { value, min });
        }
        if let Some(max) = self.max
            && value > max
        {
            return Err(AverageError::AboveMax { value, max });
        }
        Ok(())
    }
}
