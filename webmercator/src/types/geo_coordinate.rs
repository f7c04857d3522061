use super::constants::MAX_LAT;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A geographic coordinate in WGS84-style degrees.
///
/// Latitude is clamped to `±85°` by the projection pipeline, never rejected.
/// Longitude is unrestricted: no wraparound normalization is performed, so
/// values outside `[-180, 180]` are carried through as-is (with the caveats
/// described on [`map_point_for_coordinate`](crate::map_point_for_coordinate)).
///
/// # Examples
///
/// ```
/// use webmercator::GeoCoordinate;
///
/// let c = GeoCoordinate::new(38.902524, -76.999338);
/// assert_eq!(c.latitude, 38.902524);
/// assert_eq!(c.longitude, -76.999338);
///
/// // out-of-range latitudes are clamped, not rejected
/// assert_eq!(GeoCoordinate::new(90.0, 0.0).clamped_latitude(), 85.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
	/// Latitude in degrees, positive north.
	pub latitude: f64,
	/// Longitude in degrees, positive east.
	pub longitude: f64,
}

impl GeoCoordinate {
	/// Creates a new `GeoCoordinate` from latitude and longitude in degrees.
	#[must_use]
	pub fn new(latitude: f64, longitude: f64) -> GeoCoordinate {
		GeoCoordinate { latitude, longitude }
	}

	/// Returns the latitude clamped to the valid projection range `±85°`.
	#[must_use]
	pub fn clamped_latitude(&self) -> f64 {
		self.latitude.clamp(-MAX_LAT, MAX_LAT)
	}

	/// Returns the coordinate as a tuple `(latitude, longitude)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.latitude, self.longitude)
	}
}

impl Debug for GeoCoordinate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoCoordinate({}, {})", self.latitude, self.longitude)
	}
}

impl TryFrom<[f64; 2]> for GeoCoordinate {
	type Error = anyhow::Error;

	/// Converts a `[latitude, longitude]` pair into a `GeoCoordinate`.
	///
	/// # Errors
	///
	/// Returns an error if either value is not finite.
	///
	/// # Examples
	/// ```
	/// use webmercator::GeoCoordinate;
	///
	/// let c = GeoCoordinate::try_from([38.9, -77.0]).unwrap();
	/// assert_eq!(c.as_tuple(), (38.9, -77.0));
	/// assert!(GeoCoordinate::try_from([f64::NAN, 0.0]).is_err());
	/// ```
	fn try_from(input: [f64; 2]) -> Result<Self> {
		ensure!(input[0].is_finite(), "latitude ({}) must be finite", input[0]);
		ensure!(input[1].is_finite(), "longitude ({}) must be finite", input[1]);
		Ok(GeoCoordinate::new(input[0], input[1]))
	}
}

impl TryFrom<Vec<f64>> for GeoCoordinate {
	type Error = anyhow::Error;

	/// Converts a `vec![latitude, longitude]` into a `GeoCoordinate`.
	///
	/// # Errors
	///
	/// Returns an error if the vector does not have exactly two elements or
	/// if either value is not finite.
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 2,
			"GeoCoordinate must have 2 elements (latitude, longitude)"
		);
		GeoCoordinate::try_from([input[0], input[1]])
	}
}
