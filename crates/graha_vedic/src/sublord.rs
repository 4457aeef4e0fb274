//! KP sub-lord lattice: star → sub → sub-sub lordship by nested
//! proportional subdivision of the 27-nakshatra circle.
//!
//! Each star span (13°20′) is divided into 9 sub-spans proportional to
//! the lords' weight-years, cycling from the star's own lord; each sub
//! span is divided again the same way, cycling from the sub lord.

use serde::Serialize;

use graha_frames::normalize_deg;

use crate::lord::{ALL_LORDS, Lord, TOTAL_VIMSHOTTARI_YEARS};

/// Span of one nakshatra: 360/27 = 13°20′.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Three-level KP lordship for one ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LordshipTriple {
    #[serde(rename = "starLord")]
    pub star: Lord,
    #[serde(rename = "subLord")]
    pub sub: Lord,
    #[serde(rename = "subSubLord")]
    pub sub_sub: Lord,
}

/// Star (nakshatra) lord for a sidereal longitude.
pub fn star_lord(lon_sidereal_deg: f64) -> Lord {
    let lon = normalize_deg(lon_sidereal_deg);
    let star_index = ((lon / NAKSHATRA_SPAN_DEG).floor() as usize).min(26);
    ALL_LORDS[star_index % 9]
}

/// Locate the proportional sub-span containing `offset` within a span of
/// `span_total` degrees, cycling from `start_lord`.
///
/// Boundary offsets belong to the span whose cumulative upper bound
/// reaches them (inclusive). If floating-point drift pushes the offset
/// past every span, the cycle's final lord owns it.
fn locate_span(start_lord: Lord, offset: f64, span_total: f64) -> (Lord, f64, f64) {
    let mut acc = 0.0;
    let mut lord = start_lord;
    for _ in 0..ALL_LORDS.len() {
        let span = span_total * (lord.years() / TOTAL_VIMSHOTTARI_YEARS);
        if offset <= acc + span {
            return (lord, offset - acc, span);
        }
        acc += span;
        lord = lord.next();
    }

    // offset drifted past the last boundary
    let last = cycle_last(start_lord);
    let span = span_total * (last.years() / TOTAL_VIMSHOTTARI_YEARS);
    (last, span, span)
}

/// Final lord of a 9-lord cycle starting at `start_lord`.
const fn cycle_last(start_lord: Lord) -> Lord {
    ALL_LORDS[(start_lord.index() as usize + 8) % 9]
}

/// Star, sub, and sub-sub lords for a sidereal longitude.
///
/// Pure and total: every real input maps to exactly one triple.
pub fn sub_lords(lon_sidereal_deg: f64) -> LordshipTriple {
    let lon = normalize_deg(lon_sidereal_deg);
    let star_index = ((lon / NAKSHATRA_SPAN_DEG).floor() as usize).min(26);
    let star = ALL_LORDS[star_index % 9];
    let offset_in_star = lon - (star_index as f64) * NAKSHATRA_SPAN_DEG;

    let (sub, offset_in_sub, sub_span) = locate_span(star, offset_in_star, NAKSHATRA_SPAN_DEG);
    let (sub_sub, _, _) = locate_span(sub, offset_in_sub, sub_span);

    LordshipTriple { star, sub, sub_sub }
}
