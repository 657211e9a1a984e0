use std::fmt::Display;

use crate::{transforms::{baidu, mars}, Bd09, Error, ParseCoord, Wgs84};

/// Representation of a GCJ02 ("Mars coordinates") point, the obfuscated
/// datum mandated for maps served inside mainland China. Can be converted
/// to/from [`Wgs84`] and [`Bd09`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gcj02 {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl Gcj02 {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> Gcj02 {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a GCJ02 point from a lat/lon pair. Latitude must be
    /// in range [-90,90], longitude in range [-180,180).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    pub fn create(lat: f64, lon: f64) -> Result<Gcj02, Error> {
        crate::check_coord(lat, lon)?;
        Ok(Gcj02::new(lat, lon))
    }

    /// Parses a GCJ02 point from a `"lat lon"` or `"lat, lon"` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordString`] if the string does not hold
    /// exactly two numeric fields, or [`Error::InvalidCoord`] if the parsed
    /// values are out of range.
    pub fn parse_str(value: &str) -> Result<Gcj02, Error> {
        let (lat, lon) = crate::parse_lat_lon(value)?;
        Gcj02::create(lat, lon)
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

    /// Converts from [`Wgs84`] to [`Gcj02`], applying the national-datum
    /// obfuscation offset.
    ///
    /// The offset is only defined inside a coarse coverage box over
    /// mainland China; outside it the two systems are treated as identical
    /// and the point is returned unchanged, exactly.
    ///
    /// # Usage
    ///
    /// ```
    /// use cncoord::Wgs84;
    ///
    /// // Outside the coverage box the conversion is the identity
    /// let nyc = Wgs84::create(40.748333, -73.985278).unwrap();
    /// let converted = nyc.to_gcj02();
    ///
    /// assert_eq!(converted.latitude(), nyc.latitude());
    /// assert_eq!(converted.longitude(), nyc.longitude());
    /// ```
    pub fn from_wgs84(value: &Wgs84) -> Gcj02 {
        if mars::out_of_china(value.longitude, value.latitude) {
            return Gcj02::new(value.latitude, value.longitude);
        }

        let (dlon, dlat) = mars::delta(value.longitude, value.latitude);

        Gcj02::new(value.latitude + dlat, value.longitude + dlon)
    }

    /// Converts from [`Gcj02`] to [`Wgs84`]. Approximate inverse; see
    /// [`Wgs84::from_gcj02`].
    pub fn to_wgs84(&self) -> Wgs84 {
        Wgs84::from_gcj02(self)
    }

    /// Converts from [`Bd09`] to [`Gcj02`], removing Baidu's additional
    /// offset. Applied unconditionally, with no coverage-box check.
    ///
    /// # Usage
    ///
    /// ```
    /// use cncoord::Bd09;
    ///
    /// let coord = Bd09::create(39.915, 116.404).unwrap();
    /// let converted = coord.to_gcj02();
    ///
    /// assert!((converted.latitude() - 39.90865673957631).abs() < 1e-9);
    /// assert!((converted.longitude() - 116.39762729119315).abs() < 1e-9);
    /// ```
    pub fn from_bd09(value: &Bd09) -> Gcj02 {
        let (lon, lat) = baidu::to_gcj02(value.longitude, value.latitude);

        Gcj02::new(lat, lon)
    }

    /// Converts from [`Gcj02`] to [`Bd09`].
    ///
    /// # Usage
    ///
    /// ```
    /// use cncoord::Gcj02;
    ///
    /// let coord = Gcj02::create(39.915, 116.404).unwrap();
    /// let converted = coord.to_bd09();
    ///
    /// assert!((converted.latitude() - 39.92133699351021).abs() < 1e-9);
    /// assert!((converted.longitude() - 116.41036949371029).abs() < 1e-9);
    /// ```
    pub fn to_bd09(&self) -> Bd09 {
        Bd09::from_gcj02(self)
    }
}

impl ParseCoord for Gcj02 {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        Gcj02::parse_str(value)
    }
}

impl Display for Gcj02 {
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
