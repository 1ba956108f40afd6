//! Spectral data and integration
//!
//! This module provides:
//! - Observer color-matching function tables
//! - Illuminant-weighted integration from reflectance to XYZ

pub mod cmf;
pub mod integrate;

pub use cmf::Cmf;
pub use integrate::{normalization_constant, reference_white, reflectance_to_xyz};
