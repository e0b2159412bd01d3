pub mod error;
pub mod geo;
pub mod projection;

pub use error::ProjectionError;
pub use geo::GeoCoordinate;
pub use projection::{project, try_project, GridCoordinate, EARTH_RADIUS_M, METERS_PER_BLOCK};
