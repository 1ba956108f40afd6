//! Planckian Blackbody Radiometry
//!
//! Spectral radiance of ideal thermal emitters. A Planckian curve sampled
//! over a wavelength grid is a physically meaningful illuminant for the
//! integration stage; the absolute radiance scale cancels in the
//! tristimulus normalization.
//!
//! Wavelengths are in micrometers, temperatures in kelvin and spectral
//! radiance in W/(m^2 um sr).

use std::f64::consts::PI;

/// First radiation constant, W um^4 / m^2
const C1: f64 = 3.74151e8;

/// Second radiation constant, um K
const C2: f64 = 1.43879e4;

/// Wien displacement constant, um K
const WIEN_B: f64 = 2.897768551e3;

/// Temperature search tolerance used when callers have no preference, kelvin
pub const DEFAULT_TEMPERATURE_TOLERANCE: f64 = 1e-8;

/// Spectral radiance of a blackbody at one wavelength (Planck's law)
#[inline]
pub fn planck_radiance(wavelength_um: f64, temperature_k: f64) -> f64 {
    let leading = C1 / (PI * wavelength_um.powi(5));
    let exponent = C2 / (wavelength_um * temperature_k);
    leading / (exponent.exp() - 1.0)
}

/// Spectral radiance over a wavelength grid at one temperature
pub fn planckian_spd(wavelengths_um: &[f64], temperature_k: f64) -> Vec<f64> {
    wavelengths_um
        .iter()
        .map(|&wavelength| planck_radiance(wavelength, temperature_k))
        .collect()
}

/// Wavelength of maximum spectral radiance (Wien displacement law)
#[inline]
pub fn wien_peak(temperature_k: f64) -> f64 {
    WIEN_B / temperature_k
}

/// Recover the temperature producing a given radiance at one wavelength
///
/// Bisection between 0 K and 6000 K. Radiance grows monotonically with
/// temperature at a fixed wavelength, so the search brackets the answer;
/// it stops once the bracket is narrower than `tolerance_k`. Radiances
/// outside what 6000 K can produce converge to the nearest bound.
pub fn radiance_to_temperature(wavelength_um: f64, radiance: f64, tolerance_k: f64) -> f64 {
    let mut low: f64 = 0.0;
    let mut high: f64 = 6000.0;
    let mut temperature = (low + high) / 2.0;

    while (high - low) > tolerance_k {
        temperature = (low + high) / 2.0;
        if planck_radiance(wavelength_um, temperature) > radiance {
            high = temperature;
        } else {
            low = temperature;
        }
    }

    temperature
}
