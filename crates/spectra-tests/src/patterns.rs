//! Spectral test data generation
//!
//! Provides deterministic reflectance spectra, illuminants and a fitted
//! standard observer for pipeline evaluation.

use oxspectra_core::{Cmf, radiometry};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Reflectance spectrum shapes
#[derive(Debug, Clone, Copy)]
pub enum ReflectancePattern {
    /// Unit reflectance at every wavelength (perfect diffuse reflector)
    PerfectReflector,
    /// Constant reflectance at the given level
    Flat(f64),
    /// Gaussian band reflector, e.g. a saturated colored sample
    Band { center_nm: f64, width_nm: f64 },
    /// Linear ramp from 0 at the first band to 1 at the last
    Ramp,
    /// Uniform random reflectance in [0, 1) with seed
    Random(u64),
}

/// Evenly spaced wavelength grid in nanometers, inclusive of both endpoints
pub fn wavelength_grid(start_nm: f64, end_nm: f64, bands: usize) -> Vec<f64> {
    if bands <= 1 {
        return vec![start_nm];
    }
    let step = (end_nm - start_nm) / (bands - 1) as f64;
    (0..bands).map(|i| start_nm + step * i as f64).collect()
}

/// Generate one reflectance spectrum over a wavelength grid
pub fn generate_reflectance(pattern: ReflectancePattern, wavelengths: &[f64]) -> Vec<f64> {
    match pattern {
        ReflectancePattern::PerfectReflector => vec![1.0; wavelengths.len()],
        ReflectancePattern::Flat(level) => vec![level; wavelengths.len()],
        ReflectancePattern::Band {
            center_nm,
            width_nm,
        } => wavelengths
            .iter()
            .map(|&w| {
                let t = (w - center_nm) / width_nm;
                (-0.5 * t * t).exp()
            })
            .collect(),
        ReflectancePattern::Ramp => {
            let n = wavelengths.len();
            (0..n)
                .map(|i| if n <= 1 { 1.0 } else { i as f64 / (n - 1) as f64 })
                .collect()
        }
        ReflectancePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            wavelengths.iter().map(|_| rng.gen_range(0.0..1.0)).collect()
        }
    }
}

/// Generate a batch of spectra; `Random` advances its seed per sample
pub fn generate_batch(
    pattern: ReflectancePattern,
    wavelengths: &[f64],
    count: usize,
) -> Vec<Vec<f64>> {
    (0..count)
        .map(|i| {
            let per_sample = match pattern {
                ReflectancePattern::Random(seed) => {
                    ReflectancePattern::Random(seed.wrapping_add(i as u64))
                }
                other => other,
            };
            generate_reflectance(per_sample, wavelengths)
        })
        .collect()
}

// ============================================================================
// Fitted standard observer
// ============================================================================

/// Piecewise Gaussian lobe with a separate falloff rate per side of the peak
fn lobe(x: f64, alpha: f64, mu: f64, inv_sigma_low: f64, inv_sigma_high: f64) -> f64 {
    let t = (x - mu) * if x < mu { inv_sigma_low } else { inv_sigma_high };
    alpha * (-0.5 * t * t).exp()
}

/// Analytic fit of the CIE 1931 2-degree xbar curve (Wyman, Sloan and Shirley)
pub fn x_bar_1931(wavelength_nm: f64) -> f64 {
    lobe(wavelength_nm, 0.362, 442.0, 0.0624, 0.0374)
        + lobe(wavelength_nm, 1.056, 599.8, 0.0264, 0.0323)
        + lobe(wavelength_nm, -0.065, 501.1, 0.0490, 0.0382)
}

/// Analytic fit of the CIE 1931 2-degree ybar curve (Wyman, Sloan and Shirley)
pub fn y_bar_1931(wavelength_nm: f64) -> f64 {
    lobe(wavelength_nm, 0.821, 568.8, 0.0213, 0.0247)
        + lobe(wavelength_nm, 0.286, 530.9, 0.0613, 0.0322)
}

/// Analytic fit of the CIE 1931 2-degree zbar curve (Wyman, Sloan and Shirley)
pub fn z_bar_1931(wavelength_nm: f64) -> f64 {
    lobe(wavelength_nm, 1.217, 437.0, 0.0845, 0.0278)
        + lobe(wavelength_nm, 0.681, 459.0, 0.0385, 0.0725)
}

/// The fitted 1931 observer sampled over a nanometer grid
pub fn fitted_observer(wavelengths_nm: &[f64]) -> Cmf {
    Cmf::new(
        wavelengths_nm
            .iter()
            .map(|&w| [x_bar_1931(w), y_bar_1931(w), z_bar_1931(w)])
            .collect(),
    )
}

// ============================================================================
// Illuminants
// ============================================================================

/// Planckian radiator sampled over a nanometer grid
pub fn planckian_illuminant(wavelengths_nm: &[f64], temperature_k: f64) -> Vec<f64> {
    wavelengths_nm
        .iter()
        .map(|&w| radiometry::planck_radiance(w * 1e-3, temperature_k))
        .collect()
}

/// Equal-energy illuminant
pub fn equal_energy_illuminant(bands: usize) -> Vec<f64> {
    vec![1.0; bands]
}

/// Standard grid sizes over the visible range
pub mod grids {
    /// Visible range bounds in nanometers
    pub const VISIBLE_NM: (f64, f64) = (380.0, 780.0);
    /// 10 nm sampling
    pub const COARSE: usize = 41;
    /// 5 nm sampling
    pub const STANDARD: usize = 81;
    /// 1 nm sampling
    pub const FINE: usize = 401;
}

/// The standard visible grid at 5 nm
pub fn visible_grid() -> Vec<f64> {
    wavelength_grid(grids::VISIBLE_NM.0, grids::VISIBLE_NM.1, grids::STANDARD)
}
