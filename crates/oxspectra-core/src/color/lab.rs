//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually oriented color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = reference white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)

use crate::color::white_point::WhitePoint;
use crate::color::xyz::Xyz;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from XYZ against a reference white
    ///
    /// Applies the piecewise companding function to each ratio against the
    /// white and combines the results:
    ///
    /// - L* = 116 f(Y/Yn) - 16
    /// - a* = 500 (f(X/Xn) - f(Y/Yn))
    /// - b* = 200 (f(Y/Yn) - f(Z/Zn))
    ///
    /// Ratios at or below the 0.008856 breakpoint, including zero and
    /// negative ones, take the linear segment of f; the cube root is only
    /// ever evaluated for ratios above it. Out-of-range inputs therefore
    /// produce finite (if unusual) coordinates, while zero white components
    /// produce infinities through the division.
    pub fn from_xyz_with_white(xyz: Xyz, white: &WhitePoint) -> Self {
        let fx = lab_f(xyz.x / white.xyz.x);
        let fy = lab_f(xyz.y / white.xyz.y);
        let fz = lab_f(xyz.z / white.xyz.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Companding function applied per channel ratio
#[inline]
fn lab_f(t: f64) -> f64 {
    const BREAKPOINT: f64 = 0.008856;
    const LINEAR_SLOPE: f64 = 7.787;
    const LINEAR_OFFSET: f64 = 16.0 / 116.0;

    if t > BREAKPOINT {
        t.cbrt()
    } else {
        LINEAR_SLOPE * t + LINEAR_OFFSET
    }
}

/// Convert a batch of tristimulus values to Lab against one reference white
pub fn xyz_to_lab(xyz: &[Xyz], white: &WhitePoint) -> Vec<Lab> {
    xyz.iter()
        .map(|&v| Lab::from_xyz_with_white(v, white))
        .collect()
}

/// CIE76 color difference (Euclidean distance in Lab)
///
/// Symmetric, non-negative, and zero exactly when the operands are equal.
/// A value around 2.3 corresponds to a just-noticeable difference.
#[inline]
pub fn delta_e_ab(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
