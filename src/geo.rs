//! Position acquisition boundary
//!
//! The original application reads the browser's geolocation; a terminal has
//! no equivalent, so the position source is an injected abstraction. The
//! CLI supplies a fixed position parsed from `--coords`; other embedders can
//! plug in a real provider and surface the same three failure modes.

use thiserror::Error;

use crate::data::Coordinate;

/// Failure modes of acquiring the user's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The user or platform refused access to the position
    #[error("Location permission denied. Please enable location access in your system settings.")]
    Denied,

    /// No position could be determined
    #[error("Location information unavailable. Please try again.")]
    Unavailable,

    /// The position request timed out
    #[error("Location request timed out. Please try again.")]
    Timeout,
}

/// Source of the user's current position
pub trait PositionSource {
    /// Returns the current position, or why it could not be acquired
    fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}

/// A position known up front (e.g., parsed from a CLI argument)
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinate);

impl PositionSource for FixedPosition {
    fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_position_always_succeeds() {
        let source = FixedPosition(Coordinate {
            latitude: 49.25,
            longitude: -123.12,
        });

        let position = source.current_position().expect("Fixed position never fails");
        assert!((position.latitude - 49.25).abs() < 1e-9);
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            GeolocationError::Denied.to_string(),
            "Location permission denied. Please enable location access in your system settings."
        );
        assert_eq!(
            GeolocationError::Unavailable.to_string(),
            "Location information unavailable. Please try again."
        );
        assert_eq!(
            GeolocationError::Timeout.to_string(),
            "Location request timed out. Please try again."
        );
    }

    #[test]
    fn test_error_variants_are_distinct() {
        let errors = [
            GeolocationError::Denied,
            GeolocationError::Unavailable,
            GeolocationError::Timeout,
        ];

        for (i, a) in errors.iter().enumerate() {
            for (j, b) in errors.iter().enumerate() {
                if i == j {
                    assert_eq!(a, b);
                } else {
                    assert_ne!(a, b);
                }
            }
        }
    }
}
