//! Conversion between zoom levels, map scales and world pixel widths.
//!
//! A zoom level `z` halves the map scale of `z - 1` and doubles its pixel
//! width. Scales are expressed as plain fractions (zoom 3 is `1 : 8`, i.e.
//! a scale of `0.125`).

use crate::types::TILE_SIZE;
use itertools::Itertools;
use lazy_static::lazy_static;
use log::debug;

lazy_static! {
	/// Scale denominators for zoom levels `0..=20` (`table[z] = 2^z`).
	///
	/// Built once on first use and only ever read afterwards.
	static ref SCALE_DENOMINATORS: [f64; 21] = std::array::from_fn(|zoom| (zoom as f64).exp2());
}

/// Returns the map scale at the given zoom level: `2^(-zoom)`.
///
/// Defined for any real `zoom`, including fractional and negative values.
///
/// # Examples
///
/// ```
/// use webmercator::scale_for_zoom;
///
/// assert_eq!(scale_for_zoom(0.0), 1.0);
/// assert_eq!(scale_for_zoom(3.0), 0.125);
/// ```
pub fn scale_for_zoom(zoom: f64) -> f64 {
	(-zoom).exp2()
}

/// Returns the width in pixels of the entire world at the given zoom level:
/// `2^zoom * 256`, following the standard 256×256 tile convention.
///
/// # Examples
///
/// ```
/// use webmercator::pixel_width_at_zoom;
///
/// assert_eq!(pixel_width_at_zoom(0.0), 256.0);
/// assert_eq!(pixel_width_at_zoom(20.0), 268_435_456.0);
/// ```
pub fn pixel_width_at_zoom(zoom: f64) -> f64 {
	zoom.exp2() * TILE_SIZE
}

/// Returns the (possibly fractional) zoom level for the given map scale.
///
/// The inverse of [`scale_for_zoom`], implemented as a linear search over the
/// precomputed scale-denominator table with linear interpolation inside the
/// matched octave — not as a closed-form logarithm. Exact for integer zoom
/// levels; fractional results are a piecewise-linear approximation of the
/// true logarithm (off by up to `~0.09` zoom levels mid-octave).
///
/// Scales outside the representable range (denominator below `2^0` or above
/// `2^21`) return `0.0` instead of failing. This is the legacy fallback;
/// callers cannot distinguish it from a genuine zoom level zero. The fallback
/// emits a `log::debug!` record.
///
/// # Examples
///
/// ```
/// use webmercator::{scale_for_zoom, zoom_for_scale};
///
/// assert_eq!(zoom_for_scale(1.0), 0.0);
/// assert_eq!(zoom_for_scale(0.125), 3.0);
/// assert_eq!(zoom_for_scale(scale_for_zoom(17.0)), 17.0);
///
/// // out of range: silently degrades to zero
/// assert_eq!(zoom_for_scale(2.0), 0.0);
/// ```
pub fn zoom_for_scale(scale: f64) -> f64 {
	let denominator = 1.0 / scale;
	if let Some((zoom, lower)) = SCALE_DENOMINATORS
		.iter()
		.copied()
		.find_position(|&lower| denominator >= lower && denominator <= lower * 2.0)
	{
		return zoom as f64 + (denominator - lower) / lower;
	}
	debug!("scale denominator {denominator} is outside the zoom 0..=20 table, falling back to zoom 0");
	0.0
}
