use std::fmt::Display;

use crate::{transforms::baidu, Error, Gcj02, ParseCoord, Wgs84};

/// Representation of a BD09 point, Baidu's proprietary offset on top of
/// [`Gcj02`]. Can be converted to/from [`Gcj02`] and [`Wgs84`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bd09 {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl Bd09 {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> Bd09 {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a BD09 point from a lat/lon pair. Latitude must be
    /// in range [-90,90], longitude in range [-180,180).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    pub fn create(lat: f64, lon: f64) -> Result<Bd09, Error> {
        crate::check_coord(lat, lon)?;
        Ok(Bd09::new(lat, lon))
    }

    /// Parses a BD09 point from a `"lat lon"` or `"lat, lon"` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordString`] if the string does not hold
    /// exactly two numeric fields, or [`Error::InvalidCoord`] if the parsed
    /// values are out of range.
    pub fn parse_str(value: &str) -> Result<Bd09, Error> {
        let (lat, lon) = crate::parse_lat_lon(value)?;
        Bd09::create(lat, lon)
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

    /// Converts from [`Gcj02`] to [`Bd09`]. Applied unconditionally, with
    /// no coverage-box check.
    ///
    /// Not an exact algebraic inverse of [`Gcj02::from_bd09`]; round trips
    /// recover the input to within a few 1e-6 degrees only.
    pub fn from_gcj02(value: &Gcj02) -> Bd09 {
        let (lon, lat) = baidu::from_gcj02(value.longitude, value.latitude);

        Bd09::new(lat, lon)
    }

    /// Converts from [`Bd09`] to [`Gcj02`].
    pub fn to_gcj02(&self) -> Gcj02 {
        Gcj02::from_bd09(self)
    }

    /// Converts from [`Wgs84`] to [`Bd09`] by chaining through [`Gcj02`].
    pub fn from_wgs84(value: &Wgs84) -> Bd09 {
        value.to_gcj02().to_bd09()
    }

    /// Converts from [`Bd09`] to [`Wgs84`] by chaining through [`Gcj02`].
    pub fn to_wgs84(&self) -> Wgs84 {
        Wgs84::from_bd09(self)
    }
}

impl ParseCoord for Bd09 {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        Bd09::parse_str(value)
    }
}

impl Display for Bd09 {
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
