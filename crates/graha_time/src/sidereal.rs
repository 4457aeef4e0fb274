//! Greenwich and local mean sidereal time.
//!
//! Degree-based GMST polynomial; the house solver consumes LST in degrees
//! and converts to radians at the point of use.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 12.

use crate::julian::{J2000_JD, julian_centuries};

/// Normalize degrees to [0, 360). Local copy to keep this crate leaf-level.
fn wrap360(x: f64) -> f64 {
    let r = x % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    wrap360(
        280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Local Mean Sidereal Time in degrees for an east-positive longitude.
pub fn lst_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    wrap360(gmst_deg(jd_ut) + longitude_east_deg)
}
