//! # webmercator
//!
//! Pure, stateless coordinate math for slippy-map applications: spherical
//! (Web) Mercator projection, a fixed-zoom world-pixel coordinate system and
//! great-circle distances with three accuracy/cost trade-offs.
//!
//! ## Coordinate spaces
//! - **Geographic**: [`GeoCoordinate`], WGS84-style latitude/longitude in
//!   degrees. Latitudes are clamped to `±85°` before projection.
//! - **Projected meters**: planar Mercator meters, origin at the
//!   equator/prime-meridian intersection ([`WORLD_BOUNDS`]).
//! - **Map points**: pixels at zoom 20 with the origin at the northwest
//!   corner of the world, following the 256×256 tile convention.
//!
//! ## Usage Example
//!
//! ```rust
//! use webmercator::{
//!     DistanceMethod, GeoCoordinate, map_point_for_coordinate, meters_between_map_points,
//!     meters_per_pixel_at_latitude,
//! };
//!
//! let dc = GeoCoordinate::new(38.902524, -76.999338);
//! let portland = GeoCoordinate::new(45.0, -122.0);
//!
//! // world pixels at the fixed reference zoom
//! let a = map_point_for_coordinate(dc);
//! let b = map_point_for_coordinate(portland);
//!
//! // great-circle distance, precise geodesic baseline by default
//! let meters = meters_between_map_points(a, b, DistanceMethod::default());
//! assert_eq!(format!("{:.0} km", meters / 1000.0), "3743 km");
//!
//! // Mercator distortion: ground resolution shrinks towards the poles
//! assert!(meters_per_pixel_at_latitude(45.0, 10.0) < meters_per_pixel_at_latitude(0.0, 10.0));
//! ```
//!
//! Every operation is a pure function of its arguments plus immutable
//! constants; there is no I/O, no shared mutable state and nothing to
//! configure.

pub mod distance;
pub mod projection;
pub mod types;

pub use distance::*;
pub use projection::*;
pub use types::*;
