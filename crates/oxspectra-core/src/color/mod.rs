//! Colorimetric value types and conversions
//!
//! This module provides:
//! - CIE XYZ tristimulus values
//! - CIELAB (L*a*b*) coordinates and the CIE76 difference
//! - xyY chromaticity coordinates
//! - Reference white definitions

pub mod lab;
pub mod white_point;
pub mod xyy;
pub mod xyz;

pub use lab::{Lab, delta_e_ab, xyz_to_lab};
pub use white_point::{A, D50, D55, D65, D75, E, F2, F7, F11, WhitePoint};
pub use xyy::{XyY, xyz_to_xyy};
pub use xyz::Xyz;
