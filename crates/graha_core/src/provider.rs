//! External capability interfaces: ephemeris positions and sunrise windows.
//!
//! The engine never evaluates an ephemeris or scans for horizon events
//! itself; it consumes both through these traits. Implementations may
//! hold process-wide lazily-initialized state (a planetary kernel is
//! expensive to load) — the engine treats them as opaque capabilities and
//! never manages that lifecycle. Both traits are object-safe so callers
//! can wrap providers in caching decorators.

use serde::Serialize;

use graha_time::UtcInstant;

use crate::body::Body;
use crate::error::CoreError;
use crate::location::GeoLocation;

/// One body's tropical, geocentric apparent position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude in degrees, [0, 360), tropical.
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees.
    pub lat_deg: f64,
    /// Geocentric distance in AU.
    pub dist_au: f64,
    /// Longitude rate in degrees/day. Providers approximate this by a
    /// symmetric finite difference at ±1 minute.
    pub speed_lon: f64,
}

/// Tropical geocentric position provider for the full body roster.
pub trait EphemerisSource {
    /// Positions for all bodies in [`crate::ALL_BODIES`] at a UTC instant.
    ///
    /// The observer location is available for providers that model
    /// topocentric effects; geocentric providers may ignore it.
    fn positions(
        &self,
        utc: &UtcInstant,
        location: &GeoLocation,
    ) -> Result<Vec<BodyPosition>, CoreError>;
}

/// Sunrise-window provider.
pub trait SunriseSource {
    /// The first two sunrises at or after local midnight, as JD (UT).
    ///
    /// Implementations scan a 2-day window from `local_midnight_utc_jd`
    /// and fall back to a fixed 06:00-local approximation when fewer than
    /// two events exist (polar day/night).
    fn sunrise_window(
        &self,
        location: &GeoLocation,
        local_midnight_utc_jd: f64,
    ) -> Result<(f64, f64), CoreError>;
}

/// Find a required body in a position list.
///
/// A missing body is a provider-contract violation, reported as
/// [`CoreError::MissingBody`]; it is not recoverable locally.
pub fn position_of(positions: &[BodyPosition], body: Body) -> Result<&BodyPosition, CoreError> {
    positions
        .iter()
        .find(|p| p.body == body)
        .ok_or(CoreError::MissingBody(body.name()))
}
