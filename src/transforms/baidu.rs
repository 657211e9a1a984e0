use num::Complex;

use crate::constants::X_PI;

// Fixed linear shift applied on top of the polar perturbation
const LON_SHIFT: f64 = 0.0065;
const LAT_SHIFT: f64 = 0.006;

/// GCJ-02 -> BD-09: treat the point as a vector in the lon/lat plane and
/// nudge its magnitude and angle. Applied unconditionally; BD-09 only
/// occurs inside China.
pub(crate) fn from_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    let p = Complex::new(lon, lat);
    let z = p.norm() + 0.00002 * (lat * X_PI).sin();
    let theta = p.arg() + 0.000003 * (lon * X_PI).cos();
    let shifted = Complex::from_polar(z, theta);

    (shifted.re + LON_SHIFT, shifted.im + LAT_SHIFT)
}

/// BD-09 -> GCJ-02. The two directions are defined independently rather
/// than as algebraic inverses; a round trip only recovers the input to
/// within a few 1e-6 degrees.
pub(crate) fn to_gcj02(lon: f64, lat: f64) -> (f64, f64) {
    let p = Complex::new(lon - LON_SHIFT, lat - LAT_SHIFT);
    let z = p.norm() - 0.00002 * (p.im * X_PI).sin();
    let theta = p.arg() - 0.000003 * (p.re * X_PI).cos();
    let back = Complex::from_polar(z, theta);

    (back.re, back.im)
}
