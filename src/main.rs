use anyhow::{Context, Result};
use mc_grid_projector::{try_project, GeoCoordinate};

/// Sample location (Petersburg, Virginia area)
const SAMPLE_LAT: f64 = 37.23;
const SAMPLE_LON: f64 = -77.405;

fn main() -> Result<()> {
    env_logger::init();

    let coord = GeoCoordinate::new(SAMPLE_LAT, SAMPLE_LON);
    log::debug!("projecting lat={} lon={}", coord.lat, coord.lon);

    let grid = try_project(coord).with_context(|| format!("failed to project {coord:?}"))?;
    log::debug!("raw grid position {grid}, block {}", grid.block());

    println!("Minecraft coordinates: {grid:.2}");

    Ok(())
}
