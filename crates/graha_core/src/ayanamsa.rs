//! Ayanamsa: the tropical→sidereal longitude offset.
//!
//! The Lahiri value is a practical linear approximation anchored at
//! J2000.0 and advanced by the general precession rate. The KP value is
//! Lahiri minus a fixed empirical constant carried from long-standing KP
//! practice; it has no published derivation and is kept as a literal.

use graha_frames::normalize_deg;
use graha_time::julian_centuries;

use serde::Serialize;

/// Lahiri ayanamsa at J2000.0, degrees.
const LAHIRI_J2000_DEG: f64 = 23.85675;

/// General precession in longitude, arcseconds per Julian year.
const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.290966;

/// KP offset relative to Lahiri, degrees.
pub const KP_MINUS_LAHIRI_DEG: f64 = -0.1015;

/// Sidereal reference systems supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AyanamsaSystem {
    /// Lahiri (Chitrapaksha), linear approximation.
    Lahiri,
    /// Krishnamurti Paddhati: Lahiri with a fixed negative offset.
    Kp,
}

impl AyanamsaSystem {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "LAHIRI",
            Self::Kp => "KP",
        }
    }

    /// Parse the request-level name; anything unrecognized means KP.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "LAHIRI" | "L" => Self::Lahiri,
            _ => Self::Kp,
        }
    }

    /// Ayanamsa in degrees at a given JD (UT).
    pub fn value_deg(self, jd_ut: f64) -> f64 {
        let lahiri = lahiri_approx_deg(jd_ut);
        match self {
            Self::Lahiri => lahiri,
            Self::Kp => lahiri + KP_MINUS_LAHIRI_DEG,
        }
    }
}

/// Approximate Lahiri ayanamsa in degrees at a given JD (UT).
pub fn lahiri_approx_deg(jd_ut: f64) -> f64 {
    let years = julian_centuries(jd_ut) * 100.0;
    normalize_deg(LAHIRI_J2000_DEG + years * PRECESSION_ARCSEC_PER_YEAR / 3600.0)
}
