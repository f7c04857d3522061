//! Spherical (Web) Mercator projection between geographic coordinates and
//! projected-plane meters.
//!
//! This is the spherical form used by common web-mapping tile servers, not
//! ellipsoidal Mercator: the Earth is treated as a sphere of radius
//! [`EARTH_RADIUS`]. The projected plane has its origin at the
//! equator/prime-meridian intersection, x growing east and y growing north.

use super::pixel_width_at_zoom;
use crate::types::{EARTH_RADIUS, GeoCoordinate, MAX_LAT, Point, WORLD_SIZE};
use std::f64::consts::FRAC_PI_2;

/// Projects a geographic coordinate to planar Mercator meters.
///
/// Latitude is clamped to `±85°` first; the projection is undefined at the
/// poles. Longitude is passed through unrestricted, so values outside
/// `±180°` project beyond the world bounds.
///
/// # Examples
///
/// ```
/// use webmercator::{GeoCoordinate, projected_meters_from_coordinate};
///
/// let p = projected_meters_from_coordinate(GeoCoordinate::new(38.902524, -76.999338));
/// assert_eq!(format!("{:.1}", p.x), "-8571527.1");
/// assert_eq!(format!("{:.1}", p.y), "4707718.6");
/// ```
pub fn projected_meters_from_coordinate(coord: GeoCoordinate) -> Point {
	// keep sin(lat) away from ±1, the log form below is undefined there
	let m = 1.0 - 1e-15;
	let s = coord.clamped_latitude().to_radians().sin().clamp(-m, m);

	Point::new(
		EARTH_RADIUS * coord.longitude.to_radians(),
		EARTH_RADIUS * ((1.0 + s) / (1.0 - s)).ln() / 2.0,
	)
}

/// Recovers the geographic coordinate of a point in planar Mercator meters.
///
/// The exact inverse of [`projected_meters_from_coordinate`]; the resulting
/// latitude is clamped to `±85°`.
///
/// # Examples
///
/// ```
/// use webmercator::{GeoCoordinate, Point, coordinate_from_projected_meters};
///
/// let c = coordinate_from_projected_meters(Point::new(0.0, 0.0));
/// assert_eq!(c, GeoCoordinate::new(0.0, 0.0));
/// ```
pub fn coordinate_from_projected_meters(point: Point) -> GeoCoordinate {
	let latitude = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();

	GeoCoordinate::new(
		latitude.clamp(-MAX_LAT, MAX_LAT),
		(point.x / EARTH_RADIUS).to_degrees(),
	)
}

/// Returns the ground resolution in meters per pixel at the given latitude
/// and zoom level.
///
/// Encodes Mercator's latitude-dependent distortion: the pixel footprint
/// shrinks toward the poles by a factor of `cos(latitude)`.
///
/// # Examples
///
/// ```
/// use webmercator::meters_per_pixel_at_latitude;
///
/// // one zoom 0 pixel covers ~156.5 km at the equator
/// assert_eq!(format!("{:.2}", meters_per_pixel_at_latitude(0.0, 0.0)), "156543.03");
/// ```
pub fn meters_per_pixel_at_latitude(latitude: f64, zoom: f64) -> f64 {
	latitude.clamp(-MAX_LAT, MAX_LAT).to_radians().cos() * WORLD_SIZE / pixel_width_at_zoom(zoom)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	#[rstest]
	#[case(38.902524, -76.999338, -8_571_527.097_579, 4_707_718.574_318)]
	#[case(52.520008, 13.404954, 1_492_232.653_387, 6_894_701.264_847)]
	#[case(0.0, 0.0, 0.0, 0.0)]
	#[case(0.0, 180.0, 20_037_508.342_789, 0.0)]
	#[case(0.0, -180.0, -20_037_508.342_789, 0.0)]
	#[case(85.0, 0.0, 0.0, 19_971_868.880_409)]
	#[case(-85.0, 0.0, 0.0, -19_971_868.880_409)]
	fn worked_values(#[case] lat: f64, #[case] lon: f64, #[case] x: f64, #[case] y: f64) {
		let p = projected_meters_from_coordinate(GeoCoordinate::new(lat, lon));
		assert_abs_diff_eq!(p.x, x, epsilon = 1e-3);
		assert_abs_diff_eq!(p.y, y, epsilon = 1e-3);
	}

	#[test]
	fn polar_latitudes_are_clamped() {
		let pole = projected_meters_from_coordinate(GeoCoordinate::new(90.0, 0.0));
		let limit = projected_meters_from_coordinate(GeoCoordinate::new(85.0, 0.0));
		assert_eq!(pole, limit);
		assert!(pole.y.is_finite());
	}

	#[rstest]
	#[case(-85.0, -180.0)]
	#[case(-45.0, -77.0)]
	#[case(0.0, 0.0)]
	#[case(38.902524, -76.999338)]
	#[case(52.520008, 13.404954)]
	#[case(85.0, 180.0)]
	fn meters_round_trip(#[case] lat: f64, #[case] lon: f64) {
		let coord = GeoCoordinate::new(lat, lon);
		let back = coordinate_from_projected_meters(projected_meters_from_coordinate(coord));
		assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-9);
		assert_abs_diff_eq!(back.longitude, lon, epsilon = 1e-9);
	}

	#[test]
	fn inverse_clamps_latitude() {
		// a y value far beyond the world bounds still maps into ±85°
		let c = coordinate_from_projected_meters(Point::new(0.0, 1e9));
		assert_eq!(c.latitude, 85.0);
		let c = coordinate_from_projected_meters(Point::new(0.0, -1e9));
		assert_eq!(c.latitude, -85.0);
	}

	#[test]
	fn resolution_shrinks_towards_the_poles() {
		let mut previous = meters_per_pixel_at_latitude(0.0, 10.0);
		for lat in 1..=85 {
			let current = meters_per_pixel_at_latitude(f64::from(lat), 10.0);
			assert!(current < previous, "not strictly decreasing at lat {lat}");
			previous = current;
		}
	}

	#[test]
	fn resolution_is_symmetric_in_latitude() {
		for lat in [15.0, 45.0, 85.0] {
			assert_abs_diff_eq!(
				meters_per_pixel_at_latitude(lat, 10.0),
				meters_per_pixel_at_latitude(-lat, 10.0),
				epsilon = 1e-12
			);
		}
	}

	#[test]
	fn resolution_halves_per_zoom() {
		for zoom in 0..20 {
			let zoom = f64::from(zoom);
			assert_eq!(
				meters_per_pixel_at_latitude(45.0, zoom + 1.0),
				meters_per_pixel_at_latitude(45.0, zoom) / 2.0
			);
		}
	}

	#[test]
	fn resolution_beyond_the_clamp_is_constant() {
		assert_eq!(
			meters_per_pixel_at_latitude(90.0, 10.0),
			meters_per_pixel_at_latitude(85.0, 10.0)
		);
	}
}
