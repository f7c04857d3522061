use std::fmt::Debug;

/// A 2D extent with `f64` width and height.
///
/// The sizes produced by this crate are derived from the Earth circumference
/// and are non-negative in practice; negativity is not enforced.
#[derive(Clone, Copy, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	/// Creates a new `Size` from its width and height.
	#[must_use]
	pub fn new(width: f64, height: f64) -> Size {
		Size { width, height }
	}
}

impl Debug for Size {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Size({}, {})", self.width, self.height)
	}
}

impl From<[f64; 2]> for Size {
	fn from(value: [f64; 2]) -> Self {
		Size::new(value[0], value[1])
	}
}

impl From<(f64, f64)> for Size {
	fn from(value: (f64, f64)) -> Self {
		Size::new(value.0, value.1)
	}
}
