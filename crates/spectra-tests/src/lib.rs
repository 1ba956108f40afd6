//! # spectra-tests
//!
//! Verification harness for oxspectra.
//!
//! This crate provides:
//! - Deterministic spectral test data (reflectance patterns, illuminants,
//!   a fitted standard observer)
//! - Naive reference implementations of the pipeline math
//! - Parity tests against independent color-science crates
//!
//! ## Reference Implementations
//!
//! - **naive equations**: straight-line transliterations of the defining
//!   formulas, kept in `reference`
//! - **palette**: type-checked color conversions, f64
//! - **colorutils-rs**: image-oriented conversions, f32
//!
//! ## Test Categories
//!
//! 1. **Pipeline Properties**: normalization, white mapping, metric axioms
//! 2. **Reference Parity**: agreement with the naive and external references
//! 3. **Numeric Edges**: degenerate illuminants, zero whites, zero-sum colors

pub mod patterns;
pub mod reference;
