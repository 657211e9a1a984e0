#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod bd09;
pub mod gcj02;
pub mod wgs84;

pub use bd09::Bd09;
pub use gcj02::Gcj02;
pub use wgs84::Wgs84;

pub(crate) mod transforms {
    pub mod baidu;
    pub mod mars;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Coordinate string is invalid: {0}")]
    InvalidCoordString(String),
}

pub trait ParseCoord {
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordString`] if the value cannot be parsed
    /// into the target coordinate type.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses a coordinate of type `T` from a string.
///
/// # Errors
///
/// Returns [`Error::InvalidCoordString`] if the string does not hold two
/// numeric fields, or [`Error::InvalidCoord`] if the parsed values are out
/// of range.
///
/// # Usage
///
/// ```
/// use cncoord::Wgs84;
///
/// let coord: Wgs84 = cncoord::from_str("39.915, 116.404").unwrap();
///
/// assert_eq!(coord.latitude(), 39.915);
/// assert_eq!(coord.longitude(), 116.404);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Checks that latitude is in [-90, 90] and longitude in [-180, 180).
pub(crate) fn check_coord(lat: f64, lon: f64) -> Result<(), Error> {
    if !(-90_f64..=90_f64).contains(&lat) {
        Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
    } else if !(-180_f64..180_f64).contains(&lon) {
        Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180).")))
    } else {
        Ok(())
    }
}

/// Splits a `"lat lon"` or `"lat, lon"` string into its two fields.
pub(crate) fn parse_lat_lon(value: &str) -> Result<(f64, f64), Error> {
    let mut pieces = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(str::parse::<f64>);

    match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(Ok(lat)), Some(Ok(lon)), None) => Ok((lat, lon)),
        _ => Err(Error::InvalidCoordString(format!(
            "Expected two numeric fields ('lat lon'), got '{value}'"
        ))),
    }
}
