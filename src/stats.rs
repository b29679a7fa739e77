//! Summary statistics over a collected list of integers.
//!
//! Provides mean, median, mode and population standard deviation.

#![allow(clippy::cast_precision_loss)]

use std::collections::BTreeMap;

use crate::error::StatsError;

/// Integers collected from input, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberList {
    values: Vec<i64>,
}

impl NumberList {
    /// Creates a list from values in any order.
    #[must_use]
    pub fn new(mut values: Vec<i64>) -> Self {
        values.sort_unstable();
        Self { values }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Arithmetic average of all values.
    pub fn mean(&self) -> Result<f64, StatsError> {
        self.require_values("mean")?;
        let sum: i128 = self.values.iter().map(|&v| i128::from(v)).sum();
        Ok(sum as f64 / self.values.len() as f64)
    }

    /// Middle value, or the average of the two central values for an even count.
    pub fn median(&self) -> Result<f64, StatsError> {
        self.require_values("median")?;
        let middle = self.values.len() / 2;
        if self.values.len() % 2 == 0 {
            let low = self.values[middle - 1] as f64;
            let high = self.values[middle] as f64;
            Ok((low + high) / 2.0)
        } else {
            Ok(self.values[middle] as f64)
        }
    }

    /// Most frequent value; the smallest one wins a tie.
    pub fn mode(&self) -> Result<i64, StatsError> {
        self.require_values("mode")?;

        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &value in &self.values {
            *counts.entry(value).or_default() += 1;
        }

        // Ascending iteration plus a strict comparison keeps the smallest tied value.
        let mut best = (self.values[0], 0usize);
        for (value, count) in counts {
            if count > best.1 {
                best = (value, count);
            }
        }
        Ok(best.0)
    }

    /// Population standard deviation (divides by N).
    pub fn std_dev(&self) -> Result<f64, StatsError> {
        self.require_values("standard deviation")?;
        let mean = self.mean()?;
        let n = self.values.len() as f64;
        let variance = self
            .values
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        Ok(variance.sqrt())
    }

    fn require_values(&self, statistic: &'static str) -> Result<(), StatsError> {
        if self.values.is_empty() {
            Err(StatsError::EmptyInput { statistic })
        } else {
            Ok(())
        }
    }
}
