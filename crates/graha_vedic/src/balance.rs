//! Dasha entry point from the Moon: which lord's period a chart opens in,
//! and how much of it remains.

use serde::Serialize;

use graha_frames::normalize_deg;

use crate::lord::{ALL_LORDS, Lord};
use crate::sublord::NAKSHATRA_SPAN_DEG;

/// Entry state for the Vimshottari sequence at a birth/query moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaBalance {
    /// Lord of the Moon's nakshatra; the running mahadasha.
    pub lord: Lord,
    /// Years remaining of that lord's full period.
    #[serde(rename = "balanceYears")]
    pub balance_years: f64,
    /// 0-based nakshatra index (0 = Ashwini .. 26 = Revati).
    #[serde(rename = "nakshatraIndex")]
    pub nakshatra_index: u8,
    /// Fraction of the nakshatra already traversed, [0, 1).
    #[serde(rename = "elapsedFraction")]
    pub elapsed_fraction: f64,
}

/// Compute the dasha balance from the Moon's sidereal longitude.
///
/// `balance_years = lord_years × (1 − elapsed/span)`: a Moon exactly on a
/// nakshatra boundary yields the owning lord's full period.
pub fn dasha_balance(moon_sidereal_deg: f64) -> DashaBalance {
    let lon = normalize_deg(moon_sidereal_deg);
    let nakshatra_index = (((lon / NAKSHATRA_SPAN_DEG).floor() as u8).min(26)) as usize;
    let lord = ALL_LORDS[nakshatra_index % 9];

    let offset = lon - (nakshatra_index as f64) * NAKSHATRA_SPAN_DEG;
    let elapsed_fraction = offset / NAKSHATRA_SPAN_DEG;
    let balance_years = lord.years() * (1.0 - elapsed_fraction);

    DashaBalance {
        lord,
        balance_years,
        nakshatra_index: nakshatra_index as u8,
        elapsed_fraction,
    }
}
