use std::f64::consts::FRAC_PI_4;
use std::fmt;

use glam::{DVec2, I64Vec2};

use crate::error::ProjectionError;
use crate::geo::GeoCoordinate;

/// WGS84 equatorial radius, the Web Mercator reference sphere
pub const EARTH_RADIUS_M: f64 = 6378137.0;

/// Real-world metres covered by one grid block
pub const METERS_PER_BLOCK: f64 = 70.0;

/// A position on the block grid. `x` grows east, `z` grows south.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCoordinate {
    pub x: f64,
    pub z: f64,
}

impl GridCoordinate {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.z.is_finite()
    }

    /// Integer position of the block containing this point
    pub fn block(&self) -> I64Vec2 {
        DVec2::from(*self).floor().as_i64vec2()
    }
}

impl From<DVec2> for GridCoordinate {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<GridCoordinate> for DVec2 {
    fn from(c: GridCoordinate) -> Self {
        DVec2::new(c.x, c.z)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "x = {:.*}, z = {:.*}", p, self.x, p, self.z),
            None => write!(f, "x = {}, z = {}", self.x, self.z),
        }
    }
}

/// Project a geographic coordinate (lat, lon) in degrees onto the block grid.
///
/// Spherical Web Mercator scaled down by [`METERS_PER_BLOCK`], with the
/// northing negated so that `z` increases southwards.
///
/// No validation is done here. Latitudes at or past the poles follow IEEE-754:
/// `-90` yields `z = +inf`, while `90` rounds to a tangent of ~1.6e16 and so
/// yields a large finite `z`. Use [`try_project`] to reject them instead.
#[inline]
pub fn project(lat: f64, lon: f64) -> GridCoordinate {
    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();

    let x = EARTH_RADIUS_M * lon_rad;
    let z = EARTH_RADIUS_M * (FRAC_PI_4 + lat_rad / 2.0).tan().ln();

    (DVec2::new(x, -z) / METERS_PER_BLOCK).into()
}

/// Project after checking the coordinate lies inside the projection's domain
pub fn try_project(coord: GeoCoordinate) -> Result<GridCoordinate, ProjectionError> {
    coord.validate().map(GeoCoordinate::project)
}

impl GeoCoordinate {
    pub fn project(self) -> GridCoordinate {
        project(self.lat, self.lon)
    }
}
