//! Panchangam solver: the four lunar-calendar elements and their end
//! instants for one sunrise-to-sunrise day.
//!
//! All four elements are classified from the sidereal sun/moon angles at
//! sunrise; each end instant is then found by bisecting the relevant
//! angular function — unwrapped relative to its sunrise value so the
//! search never sees the 360° seam — against the element's next
//! boundary. An element that outlasts the day ends at next sunrise.

use graha_core::{Body, EphemerisSource, GeoLocation, SunriseSource, position_of};
use graha_frames::normalize_deg;
use graha_time::{UtcInstant, UtcOffset, weekday_from_jd};
use graha_vedic::{
    VAARA_NAMES, karana_from_elongation, nakshatra_from_longitude, tithi_from_elongation,
    yoga_from_sum,
};

use crate::bisect::{BISECT_ITERS, bisect_crossing, unwrap_near};
use crate::error::SearchError;
use crate::types::{DayElement, Panchangam};

/// Sidereal (sun, moon) longitudes at a JD (UT).
pub fn sun_moon_sidereal_at(
    ephemeris: &dyn EphemerisSource,
    jd_ut: f64,
    location: &GeoLocation,
    ayanamsa_deg: f64,
) -> Result<(f64, f64), SearchError> {
    let positions = ephemeris.positions(&UtcInstant::from_jd(jd_ut), location)?;
    let sun = position_of(&positions, Body::Sun)?.lon_deg;
    let moon = position_of(&positions, Body::Moon)?.lon_deg;
    Ok((
        normalize_deg(sun - ayanamsa_deg),
        normalize_deg(moon - ayanamsa_deg),
    ))
}

/// Compute the panchangam for the day starting at the given local date.
///
/// `local_midnight_utc_jd` is the local civil date's midnight expressed
/// as JD (UT); the sunrise provider scans forward from there. The UTC
/// offset only localizes the weekday — all returned instants are UTC.
pub fn panchangam_for_day(
    ephemeris: &dyn EphemerisSource,
    sunrise: &dyn SunriseSource,
    location: &GeoLocation,
    local_midnight_utc_jd: f64,
    utc_offset: UtcOffset,
    ayanamsa_deg: f64,
) -> Result<Panchangam, SearchError> {
    let (rise_jd, next_rise_jd) = sunrise.sunrise_window(location, local_midnight_utc_jd)?;
    if next_rise_jd <= rise_jd {
        return Err(SearchError::NoSunrise("window is not forward in time"));
    }

    let (sun0, moon0) = sun_moon_sidereal_at(ephemeris, rise_jd, location, ayanamsa_deg)?;
    let delta0 = normalize_deg(moon0 - sun0);
    let sum0 = normalize_deg(moon0 + sun0);

    let delta_unwrapped = |t: f64| -> Result<f64, SearchError> {
        let (sun, moon) = sun_moon_sidereal_at(ephemeris, t, location, ayanamsa_deg)?;
        Ok(unwrap_near(normalize_deg(moon - sun), delta0))
    };
    let moon_unwrapped = |t: f64| -> Result<f64, SearchError> {
        let (_, moon) = sun_moon_sidereal_at(ephemeris, t, location, ayanamsa_deg)?;
        Ok(unwrap_near(moon, moon0))
    };
    let sum_unwrapped = |t: f64| -> Result<f64, SearchError> {
        let (sun, moon) = sun_moon_sidereal_at(ephemeris, t, location, ayanamsa_deg)?;
        Ok(unwrap_near(normalize_deg(moon + sun), sum0))
    };

    let tithi = tithi_from_elongation(delta0);
    let tithi_end = bisect_crossing(
        &delta_unwrapped,
        tithi.next_boundary_deg,
        rise_jd,
        next_rise_jd,
        BISECT_ITERS,
    )?;

    let nakshatra = nakshatra_from_longitude(moon0);
    let nakshatra_end = bisect_crossing(
        &moon_unwrapped,
        nakshatra.next_boundary_deg,
        rise_jd,
        next_rise_jd,
        BISECT_ITERS,
    )?;

    let yoga = yoga_from_sum(sum0);
    let yoga_end = bisect_crossing(
        &sum_unwrapped,
        yoga.next_boundary_deg,
        rise_jd,
        next_rise_jd,
        BISECT_ITERS,
    )?;

    let karana = karana_from_elongation(delta0);
    let karana_end = bisect_crossing(
        &delta_unwrapped,
        karana.next_boundary_deg,
        rise_jd,
        next_rise_jd,
        BISECT_ITERS,
    )?;

    let local_rise_jd = rise_jd + utc_offset.seconds() as f64 / graha_time::SECONDS_PER_DAY;
    let vaara = VAARA_NAMES[weekday_from_jd(local_rise_jd) as usize];

    Ok(Panchangam {
        sunrise: UtcInstant::from_jd(rise_jd),
        next_sunrise: UtcInstant::from_jd(next_rise_jd),
        vaara,
        tithi: DayElement {
            name: tithi.name,
            number: tithi.number,
            pada: None,
            ends: UtcInstant::from_jd(tithi_end),
        },
        nakshatra: DayElement {
            name: nakshatra.name,
            number: nakshatra.number,
            pada: Some(nakshatra.pada),
            ends: UtcInstant::from_jd(nakshatra_end),
        },
        yoga: DayElement {
            name: yoga.name,
            number: yoga.number,
            pada: None,
            ends: UtcInstant::from_jd(yoga_end),
        },
        karana: DayElement {
            name: karana.name,
            number: karana.number,
            pada: None,
            ends: UtcInstant::from_jd(karana_end),
        },
    })
}
