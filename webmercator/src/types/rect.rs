use super::{Point, Size};
use std::fmt::Debug;

/// An axis-aligned rectangle defined by its minimum corner and its extent.
///
/// # Examples
///
/// ```
/// use webmercator::{Point, Rect, Size};
///
/// let rect = Rect::new(Point::new(-10.0, -5.0), Size::new(20.0, 10.0));
/// assert_eq!(rect.min_x(), -10.0);
/// assert_eq!(rect.max_y(), 5.0);
/// assert_eq!(rect.mid_x(), 0.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Rect {
	/// The minimum corner of the rectangle.
	pub origin: Point,
	/// The extent of the rectangle, growing from `origin`.
	pub size: Size,
}

impl Rect {
	/// Creates a new `Rect` from its minimum corner and size.
	#[must_use]
	pub fn new(origin: Point, size: Size) -> Rect {
		Rect { origin, size }
	}

	/// Returns the minimum x coordinate.
	#[must_use]
	pub fn min_x(&self) -> f64 {
		self.origin.x
	}

	/// Returns the minimum y coordinate.
	#[must_use]
	pub fn min_y(&self) -> f64 {
		self.origin.y
	}

	/// Returns the maximum x coordinate.
	#[must_use]
	pub fn max_x(&self) -> f64 {
		self.origin.x + self.size.width
	}

	/// Returns the maximum y coordinate.
	#[must_use]
	pub fn max_y(&self) -> f64 {
		self.origin.y + self.size.height
	}

	/// Returns the x coordinate of the rectangle center.
	#[must_use]
	pub fn mid_x(&self) -> f64 {
		self.origin.x + self.size.width / 2.0
	}

	/// Returns the y coordinate of the rectangle center.
	#[must_use]
	pub fn mid_y(&self) -> f64 {
		self.origin.y + self.size.height / 2.0
	}

	/// Returns `true` if the given point lies inside the rectangle
	/// (maximum edges included).
	#[must_use]
	pub fn contains(&self, point: Point) -> bool {
		point.x >= self.min_x() && point.x <= self.max_x() && point.y >= self.min_y() && point.y <= self.max_y()
	}
}

impl Debug for Rect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Rect({}, {}, {}, {})",
			self.origin.x, self.origin.y, self.size.width, self.size.height
		)
	}
}
