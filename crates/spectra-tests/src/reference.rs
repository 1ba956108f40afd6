//! Reference implementation wrappers
//!
//! Provides a naive scalar rendition of the pipeline math, plus unified
//! interfaces to call external color library references. The naive code
//! works on plain arrays with explicit loops so it shares nothing with
//! the production implementation.

/// Tristimulus of one reflectance sample, computed the long way
pub fn xyz_of_sample(reflectance: &[f64], cmf: &[[f64; 3]], illuminant: &[f64]) -> [f64; 3] {
    let mut y_sum = 0.0;
    for (row, power) in cmf.iter().zip(illuminant) {
        y_sum += row[1] * power;
    }
    let k = 100.0 / y_sum;

    let mut out = [0.0; 3];
    for ((row, power), r) in cmf.iter().zip(illuminant).zip(reflectance) {
        out[0] += row[0] * power * r;
        out[1] += row[1] * power * r;
        out[2] += row[2] * power * r;
    }
    [out[0] * k, out[1] * k, out[2] * k]
}

/// Reference white: the tristimulus of a unit reflector
pub fn white_of(cmf: &[[f64; 3]], illuminant: &[f64]) -> [f64; 3] {
    let ones = vec![1.0; illuminant.len()];
    xyz_of_sample(&ones, cmf, illuminant)
}

/// CIELAB from tristimulus, written directly from the defining equations
pub fn lab_of_xyz(xyz: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let f = |t: f64| {
        if t > 0.008856 {
            t.powf(1.0 / 3.0)
        } else {
            7.787 * t + 16.0 / 116.0
        }
    };
    let fx = f(xyz[0] / white[0]);
    let fy = f(xyz[1] / white[1]);
    let fz = f(xyz[2] / white[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Chromaticity projection, written directly from the defining equations
pub fn xyy_of_xyz(xyz: [f64; 3]) -> [f64; 3] {
    let sum = xyz[0] + xyz[1] + xyz[2];
    [xyz[0] / sum, xyz[1] / sum, xyz[1]]
}

/// Euclidean distance in Lab
pub fn delta_e(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dl = a[0] - b[0];
    let da = a[1] - b[1];
    let db = a[2] - b[2];
    (dl * dl + da * da + db * db).sqrt()
}

/// Lab via the palette crate, D65 white, f64 throughout
///
/// palette works on 0-1 tristimulus and uses the exact rational CIE
/// constants, so components agree with the truncated-constant form to
/// about 1e-3.
pub fn lab_via_palette(xyz: [f64; 3]) -> [f64; 3] {
    use palette::convert::IntoColorUnclamped;
    use palette::white_point::D65;

    let scaled = palette::Xyz::<D65, f64>::new(xyz[0] / 100.0, xyz[1] / 100.0, xyz[2] / 100.0);
    let lab: palette::Lab<D65, f64> = scaled.into_color_unclamped();
    [lab.l, lab.a, lab.b]
}

/// Lab via the colorutils-rs crate, D65 white, f32 internally
pub fn lab_via_colorutils(xyz: [f64; 3]) -> [f64; 3] {
    use colorutils_rs::{Lab as CuLab, Xyz as CuXyz};

    let scaled = CuXyz::new(
        (xyz[0] / 100.0) as f32,
        (xyz[1] / 100.0) as f32,
        (xyz[2] / 100.0) as f32,
    );
    let lab = CuLab::from_xyz(scaled);
    [lab.l as f64, lab.a as f64, lab.b as f64]
}
