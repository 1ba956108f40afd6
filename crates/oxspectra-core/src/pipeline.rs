//! Validated Conversion Front-End
//!
//! [`SpectralPipeline`] binds an observer table to an illuminant once,
//! checks everything that can be checked up front, and then exposes the
//! raw transforms behind length-validated batch methods. The raw functions
//! in [`crate::spectral::integrate`], [`crate::color::lab`] and
//! [`crate::color::xyy`] stay available for callers that prefer silent
//! numeric propagation over errors.

use crate::color::lab::{Lab, xyz_to_lab};
use crate::color::white_point::WhitePoint;
use crate::color::xyy::{XyY, xyz_to_xyy};
use crate::color::xyz::Xyz;
use crate::error::{Error, Result};
use crate::spectral::cmf::Cmf;
use crate::spectral::integrate;

/// A validated observer/illuminant configuration
///
/// Construction fails on an empty observer table, a wavelength-grid
/// mismatch, or an illuminant that integrates to zero. The reference white
/// defaults to the tristimulus of the perfect diffuse reflector under the
/// configured pair, which keeps neutral samples exactly neutral in Lab.
#[derive(Debug, Clone)]
pub struct SpectralPipeline {
    cmf: Cmf,
    illuminant: Vec<f64>,
    white: WhitePoint,
}

impl SpectralPipeline {
    /// Bind an observer table to an illuminant
    pub fn new(cmf: Cmf, illuminant: Vec<f64>) -> Result<Self> {
        if cmf.is_empty() {
            return Err(Error::EmptySpectrum);
        }
        if illuminant.len() != cmf.len() {
            return Err(Error::GridMismatch {
                expected: cmf.len(),
                actual: illuminant.len(),
            });
        }
        if !integrate::normalization_constant(&cmf, &illuminant).is_finite() {
            return Err(Error::DegenerateIlluminant);
        }

        let white = WhitePoint {
            name: "derived",
            xyz: integrate::reference_white(&cmf, &illuminant),
        };

        Ok(Self {
            cmf,
            illuminant,
            white,
        })
    }

    /// Replace the derived reference white
    ///
    /// All three components must be strictly positive and finite since they
    /// are used as divisors in the Lab conversion.
    pub fn with_white(mut self, white: WhitePoint) -> Result<Self> {
        for (component, value) in [
            ("X", white.xyz.x),
            ("Y", white.xyz.y),
            ("Z", white.xyz.z),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::NonPositiveWhite { component, value });
            }
        }
        self.white = white;
        Ok(self)
    }

    /// The reference white used by [`Self::lab`]
    pub fn white(&self) -> &WhitePoint {
        &self.white
    }

    /// The bound observer table
    pub fn cmf(&self) -> &Cmf {
        &self.cmf
    }

    /// The bound illuminant spectrum
    pub fn illuminant(&self) -> &[f64] {
        &self.illuminant
    }

    /// Number of wavelength samples in the bound grid
    pub fn grid_len(&self) -> usize {
        self.cmf.len()
    }

    /// Integrate reflectance spectra to tristimulus values
    pub fn tristimulus(&self, reflectances: &[Vec<f64>]) -> Result<Vec<Xyz>> {
        self.check_samples(reflectances)?;
        Ok(integrate::reflectance_to_xyz(
            reflectances,
            &self.cmf,
            &self.illuminant,
        ))
    }

    /// Integrate reflectance spectra and convert to Lab
    pub fn lab(&self, reflectances: &[Vec<f64>]) -> Result<Vec<Lab>> {
        let xyz = self.tristimulus(reflectances)?;
        Ok(xyz_to_lab(&xyz, &self.white))
    }

    /// Integrate reflectance spectra and project onto chromaticity
    pub fn chromaticity(&self, reflectances: &[Vec<f64>]) -> Result<Vec<XyY>> {
        let xyz = self.tristimulus(reflectances)?;
        Ok(xyz_to_xyy(&xyz))
    }

    fn check_samples(&self, reflectances: &[Vec<f64>]) -> Result<()> {
        for reflectance in reflectances {
            if reflectance.len() != self.cmf.len() {
                return Err(Error::GridMismatch {
                    expected: self.cmf.len(),
                    actual: reflectance.len(),
                });
            }
        }
        Ok(())
    }
}
