//! Reference White Points
//!
//! A reference white anchors the Lab conversion: every channel is ratioed
//! against it before companding. These are 3-component tristimulus values
//! on the Y = 100 reflectance scale, matching the output of the spectral
//! integrator for the perfect diffuse reflector.
//!
//! Values are the CIE 1931 2-degree observer tristimulus of the classic
//! CIE illuminants.

use crate::color::xyz::Xyz;

/// A named reference white
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// Tristimulus values, Y normalized to 100
    pub xyz: Xyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }

    /// Get the chromaticity coordinates (x, y)
    pub fn chromaticity(&self) -> (f64, f64) {
        let xyy = self.xyz.to_xyy();
        (xyy.x, xyy.y)
    }
}

// ============================================================================
// Standard CIE Illuminants
// ============================================================================

/// CIE Standard Illuminant A (Incandescent)
///
/// Correlated Color Temperature: ~2856K
pub const A: WhitePoint = WhitePoint::new("A", 109.850, 100.0, 35.585);

/// CIE Standard Illuminant D50 (Horizon Light)
///
/// Correlated Color Temperature: ~5003K
/// The customary white for print and graphic-arts viewing.
pub const D50: WhitePoint = WhitePoint::new("D50", 96.422, 100.0, 82.521);

/// CIE Standard Illuminant D55 (Mid-morning/Mid-afternoon Daylight)
///
/// Correlated Color Temperature: ~5500K
pub const D55: WhitePoint = WhitePoint::new("D55", 95.682, 100.0, 92.149);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Correlated Color Temperature: ~6504K
/// Standard white point for sRGB and most display color spaces.
pub const D65: WhitePoint = WhitePoint::new("D65", 95.047, 100.0, 108.883);

/// CIE Standard Illuminant D75 (North Sky Daylight)
///
/// Correlated Color Temperature: ~7500K
pub const D75: WhitePoint = WhitePoint::new("D75", 94.972, 100.0, 122.638);

/// CIE Standard Illuminant E (Equal Energy)
///
/// Theoretical illuminant with equal power at all wavelengths.
pub const E: WhitePoint = WhitePoint::new("E", 100.0, 100.0, 100.0);

/// CIE Standard Illuminant F2 (Cool White Fluorescent)
pub const F2: WhitePoint = WhitePoint::new("F2", 99.187, 100.0, 67.395);

/// CIE Standard Illuminant F7 (Broadband Daylight Fluorescent)
pub const F7: WhitePoint = WhitePoint::new("F7", 95.044, 100.0, 108.755);

/// CIE Standard Illuminant F11 (Narrow Band White Fluorescent)
pub const F11: WhitePoint = WhitePoint::new("F11", 100.966, 100.0, 64.370);

// ============================================================================
// Utility functions
// ============================================================================

/// Check if two white points are approximately equal
pub fn white_points_equal(a: &WhitePoint, b: &WhitePoint, epsilon: f64) -> bool {
    (a.xyz.x - b.xyz.x).abs() < epsilon
        && (a.xyz.y - b.xyz.y).abs() < epsilon
        && (a.xyz.z - b.xyz.z).abs() < epsilon
}

/// Get a standard white point by name
pub fn from_name(name: &str) -> Option<WhitePoint> {
    match name.to_uppercase().as_str() {
        "A" => Some(A),
        "D50" => Some(D50),
        "D55" => Some(D55),
        "D65" => Some(D65),
        "D75" => Some(D75),
        "E" => Some(E),
        "F2" => Some(F2),
        "F7" => Some(F7),
        "F11" => Some(F11),
        _ => None,
    }
}
