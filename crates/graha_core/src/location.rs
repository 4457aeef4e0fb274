//! Geographic observer location.

use serde::Serialize;

use crate::error::CoreError;

/// Geographic location on Earth's surface.
///
/// Longitude is east positive, range (-180, 180]. This follows the Indian
/// chart-casting convention rather than the IAU sign; collaborators that
/// speak the IAU convention must negate on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: (-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location, validating both ranges.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, CoreError> {
        if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
            return Err(CoreError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !longitude_deg.is_finite() || longitude_deg <= -180.0 || longitude_deg > 180.0 {
            return Err(CoreError::InvalidLocation("longitude outside (-180, 180]"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
