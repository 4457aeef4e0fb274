//! Shared formatting helpers.

use serde::Serialize;

use graha_frames::normalize_deg;

/// A longitude broken into whole degrees, minutes, and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dms {
    pub deg: u32,
    pub min: u32,
    pub sec: u32,
}

/// Break an absolute longitude into degree/minute/second, rounding the
/// seconds and carrying overflow up through minutes and degrees.
pub fn deg_to_dms(abs_deg: f64) -> Dms {
    let a = normalize_deg(abs_deg);
    let mut deg = a as u32;
    let m_float = (a - deg as f64) * 60.0;
    let mut min = m_float as u32;
    let mut sec = ((m_float - min as f64) * 60.0).round() as u32;

    if sec >= 60 {
        sec -= 60;
        min += 1;
    }
    if min >= 60 {
        min -= 60;
        deg += 1;
    }
    Dms {
        deg: deg % 360,
        min,
        sec,
    }
}
