//! Ecliptic → equatorial coordinate rotation.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 13.3/13.4.

use std::f64::consts::TAU;

/// Convert ecliptic (longitude, latitude) to equatorial (RA, declination).
///
/// All arguments and results in radians; `eps` is the obliquity. RA is in
/// [0, 2*pi). The `sin(dec)` argument is clamped to the arcsine domain so
/// polar edge cases degrade instead of producing NaN.
pub fn ecliptic_to_equatorial(lam: f64, beta: f64, eps: f64) -> (f64, f64) {
    let sin_dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).clamp(-1.0, 1.0);
    let dec = sin_dec.asin();

    let y = lam.sin() * eps.cos() - beta.tan() * eps.sin();
    let x = lam.cos();
    let ra = f64::atan2(y, x).rem_euclid(TAU);

    (ra, dec)
}
