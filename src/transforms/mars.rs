use std::f64::consts::PI;

use crate::constants::{KRASOVSKY_A, KRASOVSKY_EE};

/// Coverage envelope of the GCJ-02 obfuscation. A coarse bounding
/// rectangle, not a territorial polygon; boundary values count as
/// outside, so the offset is only applied strictly inside the box.
pub(crate) fn out_of_china(lon: f64, lat: f64) -> bool {
    !(lon > 73.66 && lon < 135.05 && lat > 3.86 && lat < 53.55)
}

/// GCJ-02 offset in degrees at the given point, as a `(dlon, dlat)` pair.
///
/// The raw series values are scaled into angular degrees by the local
/// radii of curvature of the Krasovsky ellipsoid (meridional for the
/// latitude term, prime-vertical for the longitude term).
pub(crate) fn delta(lon: f64, lat: f64) -> (f64, f64) {
    let dlat = transform_lat(lon - 105.0, lat - 35.0);
    let dlon = transform_lon(lon - 105.0, lat - 35.0);

    let radlat = lat.to_radians();
    let magic = 1.0 - KRASOVSKY_EE * radlat.sin().powi(2);
    let sqrtmagic = magic.sqrt();

    let dlat = (dlat * 180.0) / ((KRASOVSKY_A * (1.0 - KRASOVSKY_EE)) / (magic * sqrtmagic) * PI);
    let dlon = (dlon * 180.0) / (KRASOVSKY_A / sqrtmagic * radlat.cos() * PI);

    (dlon, dlat)
}

// Empirical surface fit of the national datum, evaluated relative to the
// reference point (105 E, 35 N). The latitude and longitude series carry
// different coefficients and are not mirror images of each other.
fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lon(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}
