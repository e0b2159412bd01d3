use crate::error::ProjectionError;

/// A geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude, projectable only strictly inside (-90, 90)
    pub lat: f64,
    /// Longitude, conventionally -180 to 180 but any finite value projects
    pub lon: f64,
}

impl GeoCoordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when the latitude is finite and strictly between the poles
    #[inline(always)]
    pub fn has_projectable_latitude(&self) -> bool {
        self.lat > -90.0 && self.lat < 90.0
    }

    /// Check that this coordinate lies inside the projection's domain
    pub fn validate(self) -> Result<Self, ProjectionError> {
        if !self.has_projectable_latitude() {
            return Err(ProjectionError::LatitudeOutOfDomain(self.lat));
        }
        if !self.lon.is_finite() {
            return Err(ProjectionError::NonFiniteLongitude(self.lon));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectable_latitude() {
        assert!(GeoCoordinate::new(0.0, 0.0).has_projectable_latitude());
        assert!(GeoCoordinate::new(89.9999, 0.0).has_projectable_latitude());
        assert!(GeoCoordinate::new(-89.9999, 0.0).has_projectable_latitude());
        assert!(!GeoCoordinate::new(90.0, 0.0).has_projectable_latitude());
        assert!(!GeoCoordinate::new(-90.0, 0.0).has_projectable_latitude());
        assert!(!GeoCoordinate::new(f64::NAN, 0.0).has_projectable_latitude());
        assert!(!GeoCoordinate::new(f64::INFINITY, 0.0).has_projectable_latitude());
    }

    #[test]
    fn test_validate() {
        let coord = GeoCoordinate::new(37.23, -77.405);
        assert_eq!(coord.validate(), Ok(coord));

        // Longitude outside [-180, 180] is still fine
        let wrapped = GeoCoordinate::new(10.0, 540.0);
        assert_eq!(wrapped.validate(), Ok(wrapped));

        assert_eq!(
            GeoCoordinate::new(-90.0, 0.0).validate(),
            Err(ProjectionError::LatitudeOutOfDomain(-90.0))
        );
        assert_eq!(
            GeoCoordinate::new(0.0, f64::NEG_INFINITY).validate(),
            Err(ProjectionError::NonFiniteLongitude(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_validate_nan_latitude() {
        let result = GeoCoordinate::new(f64::NAN, 0.0).validate();
        assert!(matches!(result, Err(ProjectionError::LatitudeOutOfDomain(lat)) if lat.is_nan()));
    }
}
