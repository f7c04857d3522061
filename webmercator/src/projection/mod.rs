//! The stateless projection engine: spherical Mercator conversions, the
//! fixed-zoom world-pixel space and zoom/scale helpers.
//!
//! Control flow is a straight pipeline: geographic coordinate → projected
//! meters → world pixels, and the reverse. Every function is a pure function
//! of its arguments plus the constants in [`crate::types`].

mod map_point;
pub use map_point::*;

mod mercator;
pub use mercator::*;

mod scale;
pub use scale::*;
