// Semi-major axis a of the Krasovsky 1940 ellipsoid, the reference
// ellipsoid of the GCJ-02 datum
pub(crate) const KRASOVSKY_A: f64 = 6_378_245.;
// First eccentricity squared
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub(crate) const KRASOVSKY_EE: f64 = 0.00669342162296594323;

// pi * 3000 / 180, the angular frequency of the BD-09 perturbation terms
#[allow(clippy::unreadable_literal)]
pub(crate) const X_PI: f64 = 52.35987755983;
