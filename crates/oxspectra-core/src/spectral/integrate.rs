//! Spectral Integration
//!
//! Collapses reflectance spectra into CIE XYZ tristimulus values by
//! integrating them against an illuminant-weighted observer:
//!
//!   XYZ = k * CMF' * diag(illuminant) * reflectances
//!
//! with k chosen so that the perfect diffuse reflector comes out at
//! Y = 100 under the given observer/illuminant pair.
//!
//! The functions here trust their caller on wavelength-grid agreement
//! (checked only as debug assertions) and let degenerate numerics such as
//! an infinite k propagate into the results. The validating front-end in
//! [`crate::pipeline`] is the place where those conditions become errors.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::color::xyz::Xyz;
use crate::spectral::cmf::Cmf;

/// Normalization constant k = 100 / (ybar . illuminant)
///
/// An illuminant whose ybar-weighted power sums to zero yields an infinite
/// k, which is returned as-is.
pub fn normalization_constant(cmf: &Cmf, illuminant: &[f64]) -> f64 {
    debug_assert_eq!(
        cmf.len(),
        illuminant.len(),
        "observer and illuminant sampled on different grids"
    );

    let mut sum = 0.0;
    for (row, &power) in cmf.values.iter().zip(illuminant) {
        sum += row[1] * power;
    }
    100.0 / sum
}

/// Tristimulus of the perfect diffuse reflector
///
/// This is the natural reference white for the observer/illuminant pair;
/// its Y is 100 by construction of the normalization constant.
pub fn reference_white(cmf: &Cmf, illuminant: &[f64]) -> Xyz {
    let k = normalization_constant(cmf, illuminant);
    let mut acc = Xyz::default();
    for (row, &power) in cmf.values.iter().zip(illuminant) {
        acc = acc + Xyz::new(row[0], row[1], row[2]) * power;
    }
    acc * k
}

/// Integrate a batch of reflectance spectra to tristimulus values
///
/// One XYZ per sample, in input order. Sample columns are independent, so
/// the batch is spread across threads when the `rayon` feature is enabled
/// (it is by default); results do not depend on that choice.
pub fn reflectance_to_xyz(reflectances: &[Vec<f64>], cmf: &Cmf, illuminant: &[f64]) -> Vec<Xyz> {
    debug_assert_eq!(
        cmf.len(),
        illuminant.len(),
        "observer and illuminant sampled on different grids"
    );

    let k = normalization_constant(cmf, illuminant);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = reflectances.par_iter();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = reflectances.iter();
    }
    iter.map(|reflectance| integrate_sample(reflectance, cmf, illuminant, k))
        .collect()
}

/// Weighted sum over one reflectance spectrum
fn integrate_sample(reflectance: &[f64], cmf: &Cmf, illuminant: &[f64], k: f64) -> Xyz {
    debug_assert_eq!(
        cmf.len(),
        reflectance.len(),
        "sample and observer sampled on different grids"
    );

    let mut acc = Xyz::default();
    for ((row, &power), &r) in cmf.values.iter().zip(illuminant).zip(reflectance) {
        let weight = power * r;
        acc = acc + Xyz::new(row[0], row[1], row[2]) * weight;
    }
    acc * k
}
