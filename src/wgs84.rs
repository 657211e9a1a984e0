use std::fmt::Display;

use crate::{transforms::mars, Bd09, Error, Gcj02, ParseCoord};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Representation of a WGS84 latitude/longitude point, the datum reported
/// by GPS receivers. Can be converted to/from [`Gcj02`] and [`Bd09`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wgs84 {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl Wgs84 {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> Wgs84 {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a WGS84 point from a lat/lon pair. First checks if
    /// the values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use cncoord::Wgs84;
    ///
    /// let coord = Wgs84::create(39.915, 116.404);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let invalid_coord_lat = Wgs84::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = Wgs84::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<Wgs84, Error> {
        crate::check_coord(lat, lon)?;
        Ok(Wgs84::new(lat, lon))
    }

    /// Parses a WGS84 point from a `"lat lon"` or `"lat, lon"` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordString`] if the string does not hold
    /// exactly two numeric fields, or [`Error::InvalidCoord`] if the parsed
    /// values are out of range.
    ///
    /// # Usage
    ///
    /// ```
    /// use cncoord::Wgs84;
    ///
    /// let coord = Wgs84::parse_str("39.915 116.404").unwrap();
    ///
    /// assert_eq!(coord.latitude(), 39.915);
    /// assert_eq!(coord.longitude(), 116.404);
    ///
    /// assert!(Wgs84::parse_str("39.915").is_err());
    /// ```
    pub fn parse_str(value: &str) -> Result<Wgs84, Error> {
        let (lat, lon) = crate::parse_lat_lon(value)?;
        Wgs84::create(lat, lon)
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Returns the distance in meters between two [`Wgs84`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &Wgs84) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`Gcj02`] to [`Wgs84`].
    ///
    /// The offset surface is evaluated at the GCJ02 input point rather than
    /// at the unknown WGS84 original, so this is an approximate inverse of
    /// [`Wgs84::to_gcj02`], good to a couple of meters. Outside the
    /// obfuscation's coverage box the point is returned unchanged.
    ///
    /// # Usage
    ///
    /// ```
    /// use cncoord::Gcj02;
    ///
    /// let coord = Gcj02::create(39.915, 116.404).unwrap();
    /// let converted = coord.to_wgs84();
    ///
    /// assert!((converted.latitude() - 39.91359571849836).abs() < 1e-9);
    /// assert!((converted.longitude() - 116.39775550083061).abs() < 1e-9);
    /// ```
    pub fn from_gcj02(value: &Gcj02) -> Wgs84 {
        if mars::out_of_china(value.longitude, value.latitude) {
            return Wgs84::new(value.latitude, value.longitude);
        }

        let (dlon, dlat) = mars::delta(value.longitude, value.latitude);

        Wgs84::new(value.latitude - dlat, value.longitude - dlon)
    }

    /// Converts from [`Wgs84`] to [`Gcj02`].
    ///
    /// # Usage
    ///
    /// ```
    /// use cncoord::Wgs84;
    ///
    /// let coord = Wgs84::create(39.915, 116.404).unwrap();
    /// let converted = coord.to_gcj02();
    ///
    /// assert!((converted.latitude() - 39.91640428150164).abs() < 1e-9);
    /// assert!((converted.longitude() - 116.41024449916938).abs() < 1e-9);
    /// ```
    pub fn to_gcj02(&self) -> Gcj02 {
        Gcj02::from_wgs84(self)
    }

    /// Converts from [`Bd09`] to [`Wgs84`] by chaining through [`Gcj02`].
    ///
    /// # Usage
    ///
    /// ```
    /// use cncoord::Bd09;
    ///
    /// let coord = Bd09::create(39.915, 116.404).unwrap();
    /// let converted = coord.to_wgs84();
    ///
    /// assert!((converted.latitude() - 39.907253214522164).abs() < 1e-9);
    /// assert!((converted.longitude() - 116.3913836995125).abs() < 1e-9);
    /// ```
    pub fn from_bd09(value: &Bd09) -> Wgs84 {
        value.to_gcj02().to_wgs84()
    }

    /// Converts from [`Wgs84`] to [`Bd09`] by chaining through [`Gcj02`].
    ///
    /// # Usage
    ///
    /// ```
    /// use cncoord::Wgs84;
    ///
    /// let coord = Wgs84::create(39.915, 116.404).unwrap();
    /// let converted = coord.to_bd09();
    ///
    /// assert!((converted.latitude() - 39.92269955221621).abs() < 1e-9);
    /// assert!((converted.longitude() - 116.41662724378733).abs() < 1e-9);
    /// ```
    pub fn to_bd09(&self) -> Bd09 {
        Bd09::from_wgs84(self)
    }
}

impl ParseCoord for Wgs84 {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        Wgs84::parse_str(value)
    }
}

impl Display for Wgs84 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
