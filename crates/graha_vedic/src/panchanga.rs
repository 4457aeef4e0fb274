//! Panchanga classifiers: tithi, nakshatra (+pada), yoga, and karana from
//! instantaneous sun/moon angles.
//!
//! These are the pure per-moment lookups; finding when an element *ends*
//! is the search layer's job, which consumes the `next_boundary_deg`
//! field each classifier reports.

use serde::Serialize;

use graha_frames::normalize_deg;

use crate::sublord::NAKSHATRA_SPAN_DEG;

/// One tithi spans 12 degrees of moon−sun elongation.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// One karana spans 6 degrees of moon−sun elongation (half a tithi).
pub const KARANA_SPAN_DEG: f64 = 6.0;

/// Pada span: a quarter nakshatra, 3°20′.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 30 tithi names, Shukla Pratipada through Amavasya.
pub const TITHI_NAMES: [&str; 30] = [
    "Shukla Pratipada",
    "Shukla Dwitiya",
    "Shukla Tritiya",
    "Shukla Chaturthi",
    "Shukla Panchami",
    "Shukla Shashthi",
    "Shukla Saptami",
    "Shukla Ashtami",
    "Shukla Navami",
    "Shukla Dashami",
    "Shukla Ekadashi",
    "Shukla Dwadashi",
    "Shukla Trayodashi",
    "Shukla Chaturdashi",
    "Purnima",
    "Krishna Pratipada",
    "Krishna Dwitiya",
    "Krishna Tritiya",
    "Krishna Chaturthi",
    "Krishna Panchami",
    "Krishna Shashthi",
    "Krishna Saptami",
    "Krishna Ashtami",
    "Krishna Navami",
    "Krishna Dashami",
    "Krishna Ekadashi",
    "Krishna Dwadashi",
    "Krishna Trayodashi",
    "Krishna Chaturdashi",
    "Amavasya",
];

/// The 27 nakshatra names, Ashwini through Revati.
pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// The 27 yoga names, Vishkumbha through Vaidhriti.
pub const YOGA_NAMES: [&str; 27] = [
    "Vishkumbha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarman",
    "Dhriti",
    "Shoola",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// The repeating 7 movable karanas.
const KARANA_CYCLE: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti",
];

/// The fixed karanas: one at the start of the cycle, three at its end.
const KARANA_FIRST: &str = "Kimstughna";
const KARANA_LAST: [&str; 3] = ["Shakuni", "Chatushpada", "Naga"];

/// Weekday names indexed Monday = 0 .. Sunday = 6.
pub const VAARA_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Tithi classification for a moon−sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    /// 1-based tithi number, 1..=30.
    pub number: u8,
    pub name: &'static str,
    /// Unwrapped elongation at which this tithi ends (next 12° multiple).
    #[serde(skip)]
    pub next_boundary_deg: f64,
}

/// Tithi from the moon−sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let delta = normalize_deg(elongation_deg);
    let slot = (delta / TITHI_SPAN_DEG).floor();
    let number = (slot as u8).min(29) + 1;
    TithiPosition {
        number,
        name: TITHI_NAMES[(number as usize - 1) % 30],
        next_boundary_deg: (slot + 1.0) * TITHI_SPAN_DEG,
    }
}

/// Nakshatra classification for the Moon's sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraPosition {
    /// 1-based nakshatra number, 1..=27.
    pub number: u8,
    pub name: &'static str,
    /// Quarter within the nakshatra, 1..=4.
    pub pada: u8,
    /// Unwrapped longitude at which this nakshatra ends.
    #[serde(skip)]
    pub next_boundary_deg: f64,
}

/// Nakshatra and pada from the Moon's sidereal longitude in degrees.
pub fn nakshatra_from_longitude(moon_sidereal_deg: f64) -> NakshatraPosition {
    let lon = normalize_deg(moon_sidereal_deg);
    let slot = (lon / NAKSHATRA_SPAN_DEG).floor();
    let number = (slot as u8).min(26) + 1;
    let in_star = lon - slot * NAKSHATRA_SPAN_DEG;
    let pada = ((in_star / PADA_SPAN_DEG).floor() as u8).min(3) + 1;
    NakshatraPosition {
        number,
        name: NAKSHATRA_NAMES[(number as usize - 1) % 27],
        pada,
        next_boundary_deg: (slot + 1.0) * NAKSHATRA_SPAN_DEG,
    }
}

/// Yoga classification for the sum of sidereal sun and moon longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaPosition {
    /// 1-based yoga number, 1..=27.
    pub number: u8,
    pub name: &'static str,
    /// Unwrapped sum at which this yoga ends.
    #[serde(skip)]
    pub next_boundary_deg: f64,
}

/// Yoga from `(moon_sid + sun_sid) mod 360` in degrees.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let sum = normalize_deg(sum_deg);
    let slot = (sum / NAKSHATRA_SPAN_DEG).floor();
    let number = (slot as u8).min(26) + 1;
    YogaPosition {
        number,
        name: YOGA_NAMES[(number as usize - 1) % 27],
        next_boundary_deg: (slot + 1.0) * NAKSHATRA_SPAN_DEG,
    }
}

/// Karana classification for a moon−sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaPosition {
    /// 1-based karana number within the synodic cycle, 1..=60.
    pub number: u8,
    pub name: &'static str,
    /// Unwrapped elongation at which this karana ends (next 6° multiple).
    #[serde(skip)]
    pub next_boundary_deg: f64,
}

/// Karana from the moon−sun elongation in degrees.
///
/// Number 1 is the fixed Kimstughna; numbers 58..=60 are the fixed
/// closing three; everything between walks the movable 7-cycle.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let delta = normalize_deg(elongation_deg);
    let slot = (delta / KARANA_SPAN_DEG).floor();
    let number = (slot as u8).min(59) + 1;
    let name = if number == 1 {
        KARANA_FIRST
    } else if number >= 58 {
        KARANA_LAST[number as usize - 58]
    } else {
        KARANA_CYCLE[(number as usize - 2) % 7]
    };
    KaranaPosition {
        number,
        name,
        next_boundary_deg: (slot + 1.0) * KARANA_SPAN_DEG,
    }
}
