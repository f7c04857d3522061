//! This module defines the `DistanceMethod` enum selecting which great-circle
//! distance algorithm a call uses. Each variant maps to one pure function in
//! the [`distance`](crate::distance) module; the enum itself only carries
//! naming and parsing.
//!
//! # Examples
//!
//! ```
//! use webmercator::DistanceMethod;
//!
//! assert_eq!(DistanceMethod::default(), DistanceMethod::Geodesic);
//! assert_eq!(DistanceMethod::Haversine.as_str(), "haversine");
//! assert_eq!(DistanceMethod::parse_str("cosine").unwrap(), DistanceMethod::SphericalCosine);
//! ```

use anyhow::{Result, bail};
use std::fmt::Display;

/// Enum representing the available great-circle distance algorithms.
///
/// The variants trade accuracy against cost:
/// - [`SphericalCosine`](Self::SphericalCosine): spherical law of cosines;
///   cheapest, loses precision for very short distances.
/// - [`Haversine`](Self::Haversine): numerically stable for small distances.
/// - [`Geodesic`](Self::Geodesic): Karney geodesic on the WGS84 ellipsoid;
///   the accuracy baseline and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMethod {
	SphericalCosine,
	Haversine,
	#[default]
	Geodesic,
}

impl DistanceMethod {
	/// Returns the canonical lowercase name of the method.
	pub fn as_str(&self) -> &str {
		match self {
			DistanceMethod::SphericalCosine => "spherical-cosine",
			DistanceMethod::Haversine => "haversine",
			DistanceMethod::Geodesic => "geodesic",
		}
	}

	/// Parses a method name.
	///
	/// Accepts the canonical names plus the obvious shorthands.
	///
	/// # Examples
	///
	/// ```
	/// use webmercator::DistanceMethod;
	///
	/// assert_eq!(DistanceMethod::parse_str("Haversine").unwrap(), DistanceMethod::Haversine);
	/// assert_eq!(DistanceMethod::parse_str(" geodesic ").unwrap(), DistanceMethod::Geodesic);
	/// assert!(DistanceMethod::parse_str("euclidean").is_err());
	/// ```
	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"cosine" => DistanceMethod::SphericalCosine,
			"slc" => DistanceMethod::SphericalCosine,
			"spherical-cosine" => DistanceMethod::SphericalCosine,
			"haversine" => DistanceMethod::Haversine,
			"geodesic" => DistanceMethod::Geodesic,
			"precise" => DistanceMethod::Geodesic,
			_ => bail!("Unknown distance method. Expected spherical-cosine, haversine or geodesic"),
		})
	}
}

impl Display for DistanceMethod {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
