//! Numeric Edge Behavior
//!
//! The raw transforms promise propagation: degenerate inputs surface as
//! infinities or NaN, never as silently corrected values. The pipeline
//! front-end promises typed errors for everything it can check up front.
//! Both contracts are pinned down here.

use oxspectra_core::color::white_point::{self, WhitePoint};
use oxspectra_core::{
    Cmf, DeltaEStats, Error, Lab, SpectralPipeline, Xyz, delta_e_ab_pairs_checked,
    normalization_constant, reflectance_to_xyz, xyz_to_lab, xyz_to_xyy,
};
use spectra_tests::patterns::{
    ReflectancePattern, equal_energy_illuminant, fitted_observer, generate_reflectance,
    visible_grid,
};

// ============================================================================
// Raw transforms: propagation
// ============================================================================

#[test]
fn test_dark_illuminant_propagates_nan() {
    let grid = visible_grid();
    let cmf = fitted_observer(&grid);
    let dark = vec![0.0; grid.len()];

    let k = normalization_constant(&cmf, &dark);
    assert!(k.is_infinite());

    // 0 * inf accumulates as NaN in every channel
    let xyz = reflectance_to_xyz(&[vec![1.0; grid.len()]], &cmf, &dark);
    assert!(xyz[0].x.is_nan() && xyz[0].y.is_nan() && xyz[0].z.is_nan());
}

#[test]
fn test_zero_white_component_in_raw_lab() {
    let xyz = [Xyz::new(50.0, 50.0, 50.0)];

    // Z ratio is 50 / 0 = +inf, which the cube root keeps, so b* = -inf
    let no_z = WhitePoint::new("no-z", 95.0, 100.0, 0.0);
    let labs = xyz_to_lab(&xyz, &no_z);
    assert!(labs[0].l.is_finite());
    assert!(labs[0].a.is_finite());
    assert_eq!(labs[0].b, f64::NEG_INFINITY);

    // 0 / 0 is NaN and stays NaN through the companding
    let zero_sample = [Xyz::new(50.0, 50.0, 0.0)];
    let labs = xyz_to_lab(&zero_sample, &no_z);
    assert!(labs[0].b.is_nan());
}

#[test]
fn test_degenerate_chromaticity_sums() {
    // All-zero tristimulus: 0 / 0 on both coordinates
    let black = Xyz::new(0.0, 0.0, 0.0).to_xyy();
    assert!(black.x.is_nan());
    assert!(black.y.is_nan());
    assert_eq!(black.yb, 0.0, "luminance passes through even when zero");

    // Components canceling to a zero sum: finite / 0 follows IEEE
    let canceling = Xyz::new(50.0, -30.0, -20.0).to_xyy();
    assert!(canceling.x.is_infinite());

    // Batch conversion applies no substitution either
    let xyy = xyz_to_xyy(&[Xyz::new(0.0, 0.0, 0.0), Xyz::new(30.0, 40.0, 30.0)]);
    assert!(xyy[0].x.is_nan());
    assert!((xyy[1].x - 0.3).abs() < 1e-12);
}

#[test]
fn test_negative_tristimulus_takes_linear_branch() {
    // Out-of-gamut colors can carry a negative channel. The companding
    // sends any ratio at or below the breakpoint through the linear
    // segment, so the result is finite rather than a NaN from a
    // fractional power.
    let lab = Lab::from_xyz_with_white(Xyz::new(-5.0, 50.0, 50.0), &white_point::D65);

    let expected_a = 500.0 * ((7.787 * (-5.0 / 95.047) + 16.0 / 116.0) - 0.5_f64.cbrt());
    assert!(lab.l.is_finite() && lab.a.is_finite() && lab.b.is_finite());
    assert!(lab.a < 0.0);
    assert!((lab.a - expected_a).abs() < 1e-9);
}

#[test]
fn test_negative_reflectance_scales_linearly() {
    let grid = visible_grid();
    let cmf = fitted_observer(&grid);
    let pipeline = SpectralPipeline::new(cmf, equal_energy_illuminant(grid.len())).unwrap();

    let inverted = generate_reflectance(ReflectancePattern::Flat(-0.25), &grid);
    let xyz = pipeline.tristimulus(&[inverted.clone()]).unwrap();

    // Integration is linear, so a negative flat sample is a negative
    // scaling of the reference white
    let white = pipeline.white().xyz;
    assert!(xyz[0].approx_eq(&(white * -0.25), 1e-9));
    assert!(xyz[0].y < 0.0);

    let labs = pipeline.lab(&[inverted]).unwrap();
    assert!(labs[0].l.is_finite());
    assert!(labs[0].l < 0.0, "L of a negative sample sits below black");
}

// ============================================================================
// Pipeline front-end: typed errors
// ============================================================================

#[test]
fn test_construction_rejects_empty_observer() {
    let err = SpectralPipeline::new(Cmf::new(Vec::new()), Vec::new()).unwrap_err();
    assert!(matches!(err, Error::EmptySpectrum));
}

#[test]
fn test_construction_rejects_grid_mismatch() {
    let grid = visible_grid();
    let cmf = fitted_observer(&grid);
    let short = vec![1.0; grid.len() - 1];

    let err = SpectralPipeline::new(cmf, short).unwrap_err();
    assert!(matches!(
        err,
        Error::GridMismatch {
            expected: 81,
            actual: 80
        }
    ));
}

#[test]
fn test_construction_rejects_dark_illuminant() {
    let grid = visible_grid();
    let cmf = fitted_observer(&grid);

    let err = SpectralPipeline::new(cmf, vec![0.0; grid.len()]).unwrap_err();
    assert!(matches!(err, Error::DegenerateIlluminant));
}

#[test]
fn test_every_conversion_checks_sample_length() {
    let grid = visible_grid();
    let cmf = fitted_observer(&grid);
    let pipeline = SpectralPipeline::new(cmf, equal_energy_illuminant(grid.len())).unwrap();

    let short = vec![vec![0.5; 40]];

    for err in [
        pipeline.tristimulus(&short).unwrap_err(),
        pipeline.lab(&short).unwrap_err(),
        pipeline.chromaticity(&short).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            Error::GridMismatch {
                expected: 81,
                actual: 40
            }
        ));
        assert_eq!(
            err.to_string(),
            "Wavelength grid mismatch: expected 81 samples, got 40"
        );
    }

    // A bad sample anywhere in the batch fails the whole call
    let mixed = vec![vec![0.5; 81], vec![0.5; 40]];
    assert!(pipeline.tristimulus(&mixed).is_err());
}

#[test]
fn test_with_white_rejects_unusable_divisors() {
    let grid = visible_grid();
    let cmf = fitted_observer(&grid);

    let cases = [
        (WhitePoint::new("zero", 95.0, 0.0, 108.0), "Y", 0.0),
        (WhitePoint::new("negative", 95.0, 100.0, -1.0), "Z", -1.0),
        (WhitePoint::new("inf", f64::INFINITY, 100.0, 108.0), "X", f64::INFINITY),
    ];

    for (white, expected_component, expected_value) in cases {
        let err = SpectralPipeline::new(cmf.clone(), equal_energy_illuminant(grid.len()))
            .unwrap()
            .with_white(white)
            .unwrap_err();

        match err {
            Error::NonPositiveWhite { component, value } => {
                assert_eq!(component, expected_component);
                assert_eq!(value, expected_value);
            }
            other => panic!("expected NonPositiveWhite, got {:?}", other),
        }
    }
}

#[test]
fn test_paired_length_mismatch() {
    let reference = vec![Lab::default(); 2];
    let sample = vec![Lab::default(); 3];

    let err = delta_e_ab_pairs_checked(&reference, &sample).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { left: 2, right: 3 }));

    let err = DeltaEStats::compare(&reference, &sample).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { left: 2, right: 3 }));
}
