//! Observer Color-Matching Functions
//!
//! A standard observer is represented by three sensitivity curves sampled
//! on a shared wavelength grid. The grid itself is implicit: the observer,
//! illuminant and reflectance spectra handed to an integration must all be
//! sampled at the same wavelengths, in the same order.

/// Color-matching functions sampled on a wavelength grid
///
/// Row i holds the [xbar, ybar, zbar] sensitivities at the i-th wavelength.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmf {
    /// One [xbar, ybar, zbar] row per wavelength sample
    pub values: Vec<[f64; 3]>,
}

impl Cmf {
    /// Create color-matching functions from row-major samples
    pub fn new(values: Vec<[f64; 3]>) -> Self {
        Self { values }
    }

    /// Create color-matching functions from three separate channel curves
    ///
    /// # Panics
    ///
    /// Panics if the three channels have different lengths.
    pub fn from_channels(x_bar: &[f64], y_bar: &[f64], z_bar: &[f64]) -> Self {
        assert_eq!(
            x_bar.len(),
            y_bar.len(),
            "channel length mismatch: xbar has {} samples, ybar has {}",
            x_bar.len(),
            y_bar.len()
        );
        assert_eq!(
            y_bar.len(),
            z_bar.len(),
            "channel length mismatch: ybar has {} samples, zbar has {}",
            y_bar.len(),
            z_bar.len()
        );

        let values = x_bar
            .iter()
            .zip(y_bar)
            .zip(z_bar)
            .map(|((&x, &y), &z)| [x, y, z])
            .collect();
        Self { values }
    }

    /// Number of wavelength samples
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
