//! Geographic and Web Mercator constants shared across the crate.

use super::{Point, Rect, Size};
use std::f64::consts::PI;

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Planar Mercator world span in meters (2 * PI * EARTH_RADIUS).
///
/// The projected plane is square, so this is both its width and its height.
pub const WORLD_SIZE: f64 = 2.0 * PI * EARTH_RADIUS;

/// Maximum latitude in degrees handled by the projection pipeline.
///
/// Latitudes are clamped to `±85°` before any Mercator math (the projection
/// is undefined at the poles). Note this is the legacy clamp, not the
/// tile-aligned `±85.05112877980659°` used by square tile pyramids.
pub const MAX_LAT: f64 = 85.0;

/// Edge length of a map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Fixed zoom level of the world-pixel coordinate space.
///
/// Map points produced by [`map_point_for_coordinate`](crate::map_point_for_coordinate)
/// are pixels at this zoom, so the world is
/// `2^20 * 256 = 268_435_456` pixels wide.
pub const REFERENCE_ZOOM: f64 = 20.0;

/// The projected world bounds in meters, centered on the
/// equator/prime-meridian intersection.
///
/// # Examples
///
/// ```
/// use webmercator::WORLD_BOUNDS;
///
/// assert_eq!(WORLD_BOUNDS.mid_x(), 0.0);
/// assert_eq!(WORLD_BOUNDS.max_x(), std::f64::consts::PI * 6_378_137.0);
/// ```
pub const WORLD_BOUNDS: Rect = Rect {
	origin: Point {
		x: -PI * EARTH_RADIUS,
		y: -PI * EARTH_RADIUS,
	},
	size: Size {
		width: WORLD_SIZE,
		height: WORLD_SIZE,
	},
};
