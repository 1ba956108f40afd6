//! CIE XYZ Color Space
//!
//! XYZ is the device-independent output of spectral integration and the
//! input to every downstream representation. Values follow the reflectance
//! convention where the perfect diffuse reflector has Y = 100.

use std::ops::{Add, Mul, Sub};

use crate::color::xyy::XyY;

/// CIE 1931 XYZ tristimulus values
///
/// The XYZ color space is device-independent and encompasses all colors
/// visible to the human eye. Y represents luminance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value (mix of cone responses, roughly red)
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value (roughly blue)
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Get the luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// Check if this is a physically valid color (all components non-negative)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.z >= 0.0
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Rescale so that Y = 100
    ///
    /// A zero or non-finite Y carries through the division, so the result
    /// has non-finite components rather than a substituted default.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(100.0 / self.y)
    }

    /// Project onto chromaticity coordinates
    ///
    /// Computes x = X/(X+Y+Z) and y = Y/(X+Y+Z), carrying Y through as
    /// the luminance. When the components sum to zero both chromaticity
    /// coordinates are NaN; no replacement value is substituted.
    #[inline]
    pub fn to_xyy(&self) -> XyY {
        let sum = self.x + self.y + self.z;
        XyY {
            x: self.x / sum,
            y: self.y / sum,
            yb: self.y,
        }
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl Add for Xyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Xyz {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let xyz = Xyz::new(50.0, 60.0, 70.0);
        assert_eq!(xyz.x, 50.0);
        assert_eq!(xyz.y, 60.0);
        assert_eq!(xyz.z, 70.0);
    }

    #[test]
    fn test_array_conversion() {
        let arr = [10.0, 20.0, 30.0];
        let xyz = Xyz::from_array(arr);
        assert_eq!(xyz.to_array(), arr);

        let xyz2: Xyz = arr.into();
        assert_eq!(xyz, xyz2);
    }

    #[test]
    fn test_normalize() {
        let xyz = Xyz::new(50.0, 25.0, 75.0);
        let normalized = xyz.normalize();
        assert!((normalized.y - 100.0).abs() < 1e-10);
        assert!((normalized.x - 200.0).abs() < 1e-10);
        assert!((normalized.z - 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_normalize_zero_is_not_finite() {
        let normalized = Xyz::new(0.0, 0.0, 0.0).normalize();
        assert!(!normalized.y.is_finite());
    }

    #[test]
    fn test_xyy_equal_energy() {
        let xyy = Xyz::new(100.0, 100.0, 100.0).to_xyy();
        assert!((xyy.x - 1.0 / 3.0).abs() < 1e-12);
        assert!((xyy.y - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(xyy.yb, 100.0);
    }

    #[test]
    fn test_xyy_zero_sum_is_nan() {
        let xyy = Xyz::new(0.0, 0.0, 0.0).to_xyy();
        assert!(xyy.x.is_nan());
        assert!(xyy.y.is_nan());
        assert_eq!(xyy.yb, 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Xyz::new(1.0, 2.0, 3.0);
        let b = Xyz::new(0.1, 0.2, 0.3);

        let sum = a + b;
        assert!(sum.approx_eq(&Xyz::new(1.1, 2.2, 3.3), 1e-10));

        let diff = a - b;
        assert!(diff.approx_eq(&Xyz::new(0.9, 1.8, 2.7), 1e-10));

        let scaled = a * 2.0;
        assert!(scaled.approx_eq(&Xyz::new(2.0, 4.0, 6.0), 1e-10));
    }

    #[test]
    fn test_is_valid() {
        assert!(Xyz::new(0.0, 0.0, 0.0).is_valid());
        assert!(!Xyz::new(-1.0, 50.0, 50.0).is_valid());
        assert!(!Xyz::new(f64::NAN, 50.0, 50.0).is_valid());
    }
}
