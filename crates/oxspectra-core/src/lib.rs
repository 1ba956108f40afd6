//! # oxspectra - Spectral Colorimetry Pipeline
//!
//! Converts spectral reflectance measurements into device-independent
//! colorimetric quantities: CIE XYZ tristimulus values, CIELAB coordinates,
//! xyY chromaticity and CIE76 perceptual differences.
//!
//! ## Goals
//!
//! - **Faithful**: the classic CIE formulas with no hidden clamping; the
//!   perfect diffuse reflector always integrates to Y = 100
//! - **Transparent**: degenerate inputs propagate as infinities or NaN in
//!   the raw transforms, or as typed errors through [`SpectralPipeline`]
//! - **Fast**: batch integration spreads samples across threads (rayon)
//! - **Tested**: property tests plus parity against palette and
//!   colorutils-rs
//!
//! ## Quick Start
//!
//! ```
//! use oxspectra_core::{Cmf, SpectralPipeline};
//!
//! // A minimal three-band observer under a flat illuminant
//! let cmf = Cmf::new(vec![
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//! let pipeline = SpectralPipeline::new(cmf, vec![1.0, 1.0, 1.0])?;
//!
//! // A perfect reflector comes out as the reference white
//! let labs = pipeline.lab(&[vec![1.0, 1.0, 1.0]])?;
//! assert!((labs[0].l - 100.0).abs() < 1e-9);
//! assert!(labs[0].a.abs() < 1e-9);
//! # Ok::<(), oxspectra_core::Error>(())
//! ```

pub mod color;
pub mod diff;
pub mod error;
pub mod pipeline;
pub mod radiometry;
pub mod spectral;

pub use color::lab::{Lab, delta_e_ab, xyz_to_lab};
pub use color::white_point::WhitePoint;
pub use color::xyy::{XyY, xyz_to_xyy};
pub use color::xyz::Xyz;
pub use diff::{DeltaEStats, delta_e_ab_pairs, delta_e_ab_pairs_checked};
pub use error::{Error, Result};
pub use pipeline::SpectralPipeline;
pub use spectral::cmf::Cmf;
pub use spectral::integrate::{normalization_constant, reference_white, reflectance_to_xyz};

/// Version of oxspectra
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
