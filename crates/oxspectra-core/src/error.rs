//! Error types for oxspectra

use thiserror::Error;

/// Result type for oxspectra operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the validating pipeline layer
///
/// The raw transforms never return these; they let degenerate numerics
/// (infinities, NaN) flow through instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Spectral inputs disagree on the number of wavelength samples
    #[error("Wavelength grid mismatch: expected {expected} samples, got {actual}")]
    GridMismatch { expected: usize, actual: usize },

    /// Observer table has no wavelength samples
    #[error("Empty spectrum: observer table has no wavelength samples")]
    EmptySpectrum,

    /// Illuminant integrates to zero against the luminance channel
    #[error("Degenerate illuminant: ybar-weighted power integrates to zero")]
    DegenerateIlluminant,

    /// Reference white component that would be used as a divisor is not positive
    #[error("Reference white {component} must be positive and finite, got {value}")]
    NonPositiveWhite { component: &'static str, value: f64 },

    /// Paired arrays have different lengths
    #[error("Length mismatch between paired arrays: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
