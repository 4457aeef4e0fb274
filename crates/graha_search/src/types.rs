//! Result types for the day-element solver.

use serde::Serialize;

use graha_time::UtcInstant;

/// One calendar element valid from the previous element's end (or
/// sunrise) until `ends`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayElement {
    pub name: &'static str,
    /// 1-based index within the element's own cycle.
    pub number: u8,
    /// Quarter subdivision; nakshatra only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pada: Option<u8>,
    /// End instant (UTC). Equal to the next sunrise when the element
    /// outlasts the day.
    pub ends: UtcInstant,
}

/// The panchangam for one sunrise-to-sunrise day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Panchangam {
    pub sunrise: UtcInstant,
    #[serde(rename = "nextSunrise")]
    pub next_sunrise: UtcInstant,
    /// Weekday of the local sunrise.
    pub vaara: &'static str,
    pub tithi: DayElement,
    pub nakshatra: DayElement,
    pub yoga: DayElement,
    pub karana: DayElement,
}
