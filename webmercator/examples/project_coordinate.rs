//! Walks one coordinate through every coordinate space and compares the
//! three distance methods, mirroring a typical host-application flow.
//!
//! Run with: `cargo run --example project_coordinate`

use anyhow::Result;
use webmercator::{
	DistanceMethod, GeoCoordinate, map_point_for_coordinate, meters_between_map_points,
	meters_per_pixel_at_latitude, projected_meters_from_coordinate,
};

fn main() -> Result<()> {
	env_logger::init();

	// a fire hydrant in Washington, DC and the White House
	let hydrant = GeoCoordinate::new(38.902524, -76.999338);
	let white_house = GeoCoordinate::new(38.897957, -77.036560);

	println!("coordinate:       {hydrant:?}");
	println!("projected meters: {:?}", projected_meters_from_coordinate(hydrant));
	println!("map point:        {:?}", map_point_for_coordinate(hydrant));

	for zoom in [0.0, 10.0, 20.0] {
		println!(
			"resolution at zoom {zoom:>2}: {:>12.6} m/px",
			meters_per_pixel_at_latitude(hydrant.latitude, zoom)
		);
	}

	let a = map_point_for_coordinate(hydrant);
	let b = map_point_for_coordinate(white_house);
	for name in ["spherical-cosine", "haversine", "geodesic"] {
		let method = DistanceMethod::parse_str(name)?;
		println!("{name:>16}: {:.2} m", meters_between_map_points(a, b, method));
	}

	Ok(())
}
