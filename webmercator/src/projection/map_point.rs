//! Conversion between geographic coordinates and the fixed-zoom world-pixel
//! coordinate system ("map points").
//!
//! Map points are pixels at [`REFERENCE_ZOOM`] (zoom 20), with the origin at
//! the northwest corner of the world bounds: x grows east, y grows south, and
//! the world is `2^20 * 256 = 268_435_456` pixels on each side.

use super::{coordinate_from_projected_meters, pixel_width_at_zoom, projected_meters_from_coordinate};
use crate::types::{GeoCoordinate, Point, REFERENCE_ZOOM, WORLD_SIZE};

/// Converts a geographic coordinate to a zoom-20 world-pixel map point.
///
/// The coordinate is projected to Mercator meters, shifted so the northwest
/// corner of the world becomes the origin, and scaled to pixels. The shifted
/// components pass through an absolute-value step kept bit-for-bit from the
/// legacy implementation: for latitudes in `±85°` and longitudes in
/// `[-180, 180]` the shifted values already carry the expected signs and the
/// step changes nothing, but longitudes below `-180°` lose their sign and
/// cannot be recovered by [`coordinate_for_map_point`].
///
/// # Examples
///
/// ```
/// use webmercator::{GeoCoordinate, map_point_for_coordinate};
///
/// // the world center lands in the middle of the pixel grid
/// let center = map_point_for_coordinate(GeoCoordinate::new(0.0, 0.0));
/// assert_eq!(format!("{:.0}", center.x), "134217728");
/// assert_eq!(format!("{:.0}", center.y), "134217728");
/// ```
pub fn map_point_for_coordinate(coord: GeoCoordinate) -> Point {
	let projected = projected_meters_from_coordinate(coord);
	let shifted_x = projected.x + WORLD_SIZE / 2.0;
	let shifted_y = projected.y - WORLD_SIZE / 2.0;

	let scale = pixel_width_at_zoom(REFERENCE_ZOOM) / WORLD_SIZE;
	Point::new((shifted_x * scale).abs(), (shifted_y * scale).abs())
}

/// Recovers the geographic coordinate of a zoom-20 world-pixel map point.
///
/// Reverses the scaling and shifting of [`map_point_for_coordinate`]; the
/// y shift is inverted as `H/2 - y`, compensating the sign dropped by the
/// forward transform. Round-trips are exact (within float tolerance) for
/// longitudes in `[-180, 180]`; see [`map_point_for_coordinate`] for the
/// caveat beyond that range.
///
/// # Examples
///
/// ```
/// use webmercator::{GeoCoordinate, coordinate_for_map_point, map_point_for_coordinate};
///
/// let coord = GeoCoordinate::new(38.902524, -76.999338);
/// let back = coordinate_for_map_point(map_point_for_coordinate(coord));
/// assert!((back.latitude - coord.latitude).abs() < 1e-9);
/// assert!((back.longitude - coord.longitude).abs() < 1e-9);
/// ```
pub fn coordinate_for_map_point(point: Point) -> GeoCoordinate {
	let scale = pixel_width_at_zoom(REFERENCE_ZOOM) / WORLD_SIZE;
	let shifted_x = point.x / scale;
	let shifted_y = point.y / scale;

	coordinate_from_projected_meters(Point::new(
		shifted_x - WORLD_SIZE / 2.0,
		WORLD_SIZE / 2.0 - shifted_y,
	))
}
