//! Great-circle distances between points of the world-pixel space.
//!
//! All entry points first recover geographic coordinates via
//! [`coordinate_for_map_point`] and then dispatch to one of three
//! algorithms selected by [`DistanceMethod`]. The two spherical forms are
//! implemented here; the geodesic baseline delegates to the Karney solver of
//! the `geo` crate on the WGS84 ellipsoid.
//!
//! The three methods agree closely for points more than a few hundred meters
//! apart. At very short distances the spherical law of cosines loses
//! precision (its `acos` argument saturates near `1.0`) while haversine
//! stays stable; this divergence is expected.

use crate::projection::coordinate_for_map_point;
use crate::types::{DistanceMethod, EARTH_RADIUS, GeoCoordinate, Point};
use geo::{Distance, Geodesic};

/// Returns the distance in meters between two map points of the zoom-20
/// world-pixel space, using the given [`DistanceMethod`].
///
/// # Examples
///
/// ```
/// use webmercator::{DistanceMethod, GeoCoordinate, map_point_for_coordinate, meters_between_map_points};
///
/// let a = map_point_for_coordinate(GeoCoordinate::new(45.0, -122.0));
/// let b = map_point_for_coordinate(GeoCoordinate::new(0.0, 0.0));
///
/// let d = meters_between_map_points(a, b, DistanceMethod::default());
/// assert_eq!(format!("{:.0} km", d / 1000.0), "12463 km");
/// ```
pub fn meters_between_map_points(a: Point, b: Point, method: DistanceMethod) -> f64 {
	method.measure(coordinate_for_map_point(a), coordinate_for_map_point(b))
}

impl DistanceMethod {
	/// Returns the distance in meters between two geographic coordinates,
	/// computed with this method.
	#[must_use]
	pub fn measure(self, a: GeoCoordinate, b: GeoCoordinate) -> f64 {
		match self {
			DistanceMethod::SphericalCosine => spherical_cosine(a, b),
			DistanceMethod::Haversine => haversine(a, b),
			DistanceMethod::Geodesic => geodesic(a, b),
		}
	}
}

/// Spherical law of cosines. Cheapest form; imprecise below a few hundred
/// meters.
fn spherical_cosine(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
	let lat1 = a.latitude.to_radians();
	let lat2 = b.latitude.to_radians();
	let d_lon = (b.longitude - a.longitude).to_radians();

	// floating-point overshoot past 1.0 would make acos return NaN
	let cos_d = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos();
	EARTH_RADIUS * cos_d.min(1.0).acos()
}

/// Haversine formula. Numerically stable for small distances.
fn haversine(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
	let d_lat = (b.latitude - a.latitude).to_radians();
	let d_lon = (b.longitude - a.longitude).to_radians();

	let h = (d_lat / 2.0).sin().powi(2)
		+ (d_lon / 2.0).sin().powi(2) * a.latitude.to_radians().cos() * b.latitude.to_radians().cos();
	EARTH_RADIUS * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Karney geodesic on the WGS84 ellipsoid, via the `geo` crate.
fn geodesic(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
	Geodesic.distance(
		geo::Point::new(a.longitude, a.latitude),
		geo::Point::new(b.longitude, b.latitude),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::projection::map_point_for_coordinate;
	use approx::{assert_abs_diff_eq, assert_relative_eq};
	use rstest::rstest;

	const METHODS: [DistanceMethod; 3] = [
		DistanceMethod::SphericalCosine,
		DistanceMethod::Haversine,
		DistanceMethod::Geodesic,
	];

	fn map_point(lat: f64, lon: f64) -> Point {
		map_point_for_coordinate(GeoCoordinate::new(lat, lon))
	}

	#[test]
	fn degenerate_distance_is_zero() {
		let p = map_point(38.902524, -76.999338);
		assert_eq!(meters_between_map_points(p, p, DistanceMethod::Haversine), 0.0);
		assert_eq!(meters_between_map_points(p, p, DistanceMethod::Geodesic), 0.0);
		// the law of cosines amplifies float noise through acos near 1.0
		assert!(meters_between_map_points(p, p, DistanceMethod::SphericalCosine) < 0.2);
	}

	#[test]
	fn worked_values() {
		let a = map_point(45.0, -122.0);
		let b = map_point(0.0, 0.0);
		assert_abs_diff_eq!(
			meters_between_map_points(a, b, DistanceMethod::Haversine),
			12_468_490.9,
			epsilon = 1.0
		);
		assert_abs_diff_eq!(
			meters_between_map_points(a, b, DistanceMethod::Geodesic),
			12_462_834.9,
			epsilon = 1.0
		);
	}

	#[test]
	fn haversine_matches_the_geodesic_baseline() {
		let a = map_point(45.0, -122.0);
		let b = map_point(0.0, 0.0);
		assert_relative_eq!(
			meters_between_map_points(a, b, DistanceMethod::Haversine),
			meters_between_map_points(a, b, DistanceMethod::Geodesic),
			max_relative = 0.005
		);
	}

	#[rstest]
	#[case((45.0, -122.0), (0.0, 0.0))] // transcontinental
	#[case((52.520008, 13.404954), (48.8566, 2.3522))] // Berlin - Paris
	#[case((38.902524, -76.999338), (38.897957, -77.036560))] // ~3 km
	#[case((-33.9, 18.4), (-33.91, 18.41))] // ~1.4 km, southern hemisphere
	fn methods_agree_beyond_one_kilometer(#[case] a: (f64, f64), #[case] b: (f64, f64)) {
		let pa = map_point(a.0, a.1);
		let pb = map_point(b.0, b.1);
		let distances = METHODS.map(|method| meters_between_map_points(pa, pb, method));
		assert!(distances[0] > 1000.0);

		// the two spherical forms compute the same quantity
		assert_relative_eq!(distances[0], distances[1], max_relative = 0.001);
		// the sphere differs from the WGS84 ellipsoid by up to a few permille
		assert_relative_eq!(distances[0], distances[2], max_relative = 0.005);
		assert_relative_eq!(distances[1], distances[2], max_relative = 0.005);
	}

	#[test]
	fn distance_is_symmetric() {
		let a = map_point(52.520008, 13.404954);
		let b = map_point(48.8566, 2.3522);
		for method in METHODS {
			assert_abs_diff_eq!(
				meters_between_map_points(a, b, method),
				meters_between_map_points(b, a, method),
				epsilon = 1e-6
			);
		}
	}

	#[test]
	fn haversine_stays_stable_at_short_distances() {
		// ~1.1 m apart; the law of cosines may wobble here, haversine must not
		let a = GeoCoordinate::new(38.0, -77.0);
		let b = GeoCoordinate::new(38.00001, -77.0);
		let h = DistanceMethod::Haversine.measure(a, b);
		assert_abs_diff_eq!(h, 1.113, epsilon = 0.01);
		let c = DistanceMethod::SphericalCosine.measure(a, b);
		assert!((c - h).abs() < 0.5, "divergence too large: {c} vs {h}");
	}

	#[test]
	fn measure_dispatches_per_method() {
		let a = GeoCoordinate::new(0.0, 0.0);
		let b = GeoCoordinate::new(0.0, 1.0);
		// one degree of longitude at the equator
		assert_abs_diff_eq!(DistanceMethod::Haversine.measure(a, b), 111_319.491, epsilon = 0.001);
		assert_abs_diff_eq!(DistanceMethod::SphericalCosine.measure(a, b), 111_319.491, epsilon = 0.001);
		assert_abs_diff_eq!(DistanceMethod::Geodesic.measure(a, b), 111_319.491, epsilon = 0.001);
	}
}
