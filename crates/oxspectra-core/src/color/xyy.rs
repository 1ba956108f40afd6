//! xyY Chromaticity Coordinates
//!
//! Chromaticity separates "what hue" from "how bright": x and y locate a
//! color on the CIE chromaticity diagram while Y carries the luminance
//! unchanged from XYZ.

use crate::color::xyz::Xyz;

/// Chromaticity coordinates with luminance
///
/// x and y are projective coordinates of XYZ; for non-negative tristimulus
/// values they satisfy x >= 0, y >= 0 and x + y <= 1. A color with
/// X + Y + Z = 0 has no defined chromaticity and carries NaN in x and y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XyY {
    /// x chromaticity coordinate
    pub x: f64,
    /// y chromaticity coordinate
    pub y: f64,
    /// Luminance, unchanged from the source XYZ
    pub yb: f64,
}

impl XyY {
    /// Create new chromaticity coordinates
    #[inline]
    pub const fn new(x: f64, y: f64, yb: f64) -> Self {
        Self { x, y, yb }
    }

    /// Convert to array [x, y, Y]
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.yb]
    }

    /// Check if approximately equal to another chromaticity
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.yb - other.yb).abs() < epsilon
    }
}

/// Convert a batch of tristimulus values to chromaticity coordinates
///
/// One output per input column. Zero-sum columns produce NaN chromaticity,
/// see [`Xyz::to_xyy`].
pub fn xyz_to_xyy(xyz: &[Xyz]) -> Vec<XyY> {
    xyz.iter().map(Xyz::to_xyy).collect()
}
