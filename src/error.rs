use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// Mercator northing diverges at the poles, so latitude must sit strictly inside (-90, 90)
    #[error("latitude {0} is outside the projectable range (-90, 90)")]
    LatitudeOutOfDomain(f64),

    #[error("longitude {0} is not a finite number")]
    NonFiniteLongitude(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_value() {
        let err = ProjectionError::LatitudeOutOfDomain(90.0);
        assert_eq!(
            err.to_string(),
            "latitude 90 is outside the projectable range (-90, 90)"
        );

        let err = ProjectionError::NonFiniteLongitude(f64::INFINITY);
        assert_eq!(err.to_string(), "longitude inf is not a finite number");
    }
}
