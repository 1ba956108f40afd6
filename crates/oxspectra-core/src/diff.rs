//! Perceptual difference over batches of Lab colors
//!
//! Pairs up two Lab arrays column by column and reports the CIE76 distance
//! for each pair, plus summary statistics for whole-batch comparisons.

use crate::color::lab::{Lab, delta_e_ab};
use crate::error::{Error, Result};

/// CIE76 difference for each paired column of two Lab arrays
///
/// The arrays are expected to have equal length; this is checked only as a
/// debug assertion, and in release builds a mismatch truncates to the
/// shorter array. Use [`delta_e_ab_pairs_checked`] to get an error instead.
pub fn delta_e_ab_pairs(reference: &[Lab], sample: &[Lab]) -> Vec<f64> {
    debug_assert_eq!(
        reference.len(),
        sample.len(),
        "paired Lab arrays have different lengths"
    );

    reference
        .iter()
        .zip(sample)
        .map(|(&r, &s)| delta_e_ab(r, s))
        .collect()
}

/// Length-checked variant of [`delta_e_ab_pairs`]
pub fn delta_e_ab_pairs_checked(reference: &[Lab], sample: &[Lab]) -> Result<Vec<f64>> {
    if reference.len() != sample.len() {
        return Err(Error::LengthMismatch {
            left: reference.len(),
            right: sample.len(),
        });
    }
    Ok(delta_e_ab_pairs(reference, sample))
}

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of deltaE values
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                max: 0.0,
                p95: 0.0,
                count: 0,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let max = sorted[sorted.len() - 1];
        let p95_idx = (sorted.len() as f64 * 0.95) as usize;
        let p95 = sorted[p95_idx.min(sorted.len() - 1)];

        Self {
            mean,
            max,
            p95,
            count: values.len(),
        }
    }

    /// Summarize the pairwise differences between two Lab arrays
    pub fn compare(reference: &[Lab], sample: &[Lab]) -> Result<Self> {
        let deltas = delta_e_ab_pairs_checked(reference, sample)?;
        Ok(Self::from_values(&deltas))
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }

    /// Check if differences are acceptable (deltaE < 3.5)
    pub fn is_acceptable(&self) -> bool {
        self.max < 3.5
    }
}
