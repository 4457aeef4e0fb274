//! UTC calendar date/time with second precision.
//!
//! Provides `UtcInstant`, the canonical UTC representation used throughout
//! the engine. Converts to/from Julian Date (UT) losslessly at second
//! granularity and parses/prints ISO-8601.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
use crate::zone::UtcOffset;

/// UTC calendar date with second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcInstant {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a Julian Date (UT).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert from a Julian Date (UT), rounding to the nearest second.
    pub fn from_jd(jd: f64) -> Self {
        // Integer seconds since the midnight-aligned day count; exact in f64
        // for any JD this engine handles.
        let m = ((jd + 0.5) * SECONDS_PER_DAY).round();
        let day_index = (m / SECONDS_PER_DAY).floor();
        let sod = (m - day_index * SECONDS_PER_DAY) as u32;

        let (year, month, day_frac) = jd_to_calendar(day_index - 0.5);
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
            hour: sod / 3600,
            minute: (sod % 3600) / 60,
            second: (sod % 60) as f64,
        }
    }

    /// Shift by a UTC offset (e.g. to render a local wall-clock time).
    ///
    /// The result is a calendar timestamp in the offset zone; it is the
    /// caller's job to label it as local.
    pub fn offset_by(&self, offset: UtcOffset) -> Self {
        Self::from_jd(self.to_jd() + offset.seconds() as f64 / SECONDS_PER_DAY)
    }
}

impl fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl serde::Serialize for UtcInstant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for UtcInstant {
    type Err = TimeError;

    /// Parse an ISO-8601 timestamp.
    ///
    /// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]` with an optional trailing `Z`
    /// or `±HH:MM` offset. A space may stand in for the `T`. Offset
    /// timestamps are converted to UTC; naive timestamps are taken as UTC.
    fn from_str(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        let (date, time) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("missing date/time separator: {s}")))?;

        let mut date_parts = date.splitn(3, '-');
        let year = parse_int(date_parts.next(), "year")?;
        let month = parse_int(date_parts.next(), "month")? as u32;
        let day = parse_int(date_parts.next(), "day")? as u32;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(TimeError::Parse(format!("month/day out of range: {s}")));
        }

        // Split a trailing zone designator off the time portion.
        let (time, offset_seconds) = if let Some(t) = time.strip_suffix(['Z', 'z']) {
            (t, 0i32)
        } else if let Some(pos) = time.rfind(['+', '-']) {
            let (t, zone) = time.split_at(pos);
            (t, parse_offset(zone)?)
        } else {
            (time, 0)
        };

        let mut time_parts = time.splitn(3, ':');
        let hour = parse_int(time_parts.next(), "hour")? as u32;
        let minute = parse_int(time_parts.next(), "minute")? as u32;
        let second: f64 = match time_parts.next() {
            Some(sec) => sec
                .parse()
                .map_err(|_| TimeError::Parse(format!("bad seconds: {sec}")))?,
            None => 0.0,
        };
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(TimeError::Parse(format!("time out of range: {s}")));
        }

        let instant = Self::new(year, month, day, hour, minute, second);
        if offset_seconds == 0 {
            Ok(instant)
        } else {
            Ok(Self::from_jd(
                instant.to_jd() - offset_seconds as f64 / SECONDS_PER_DAY,
            ))
        }
    }
}

fn parse_int(part: Option<&str>, what: &str) -> Result<i32, TimeError> {
    part.ok_or_else(|| TimeError::Parse(format!("missing {what}")))?
        .parse()
        .map_err(|_| TimeError::Parse(format!("bad {what}")))
}

/// Parse `±HH:MM` (or `±HHMM`) into signed seconds east of UTC.
fn parse_offset(zone: &str) -> Result<i32, TimeError> {
    let (sign, rest) = match zone.split_at(1) {
        ("+", r) => (1, r),
        ("-", r) => (-1, r),
        _ => return Err(TimeError::Parse(format!("bad offset: {zone}"))),
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(TimeError::Parse(format!("bad offset: {zone}")));
    }
    let hours: i32 = digits[..2].parse().unwrap_or(0);
    let minutes: i32 = digits[2..].parse().unwrap_or(0);
    Ok(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_round_trip_second_exact() {
        let t = UtcInstant::new(2025, 12, 28, 8, 30, 0.0);
        let back = UtcInstant::from_jd(t.to_jd());
        assert_eq!(back, t);
    }

    #[test]
    fn from_jd_rounds_to_second() {
        // Half a millisecond short of the next second rounds up.
        let jd = UtcInstant::new(2024, 3, 20, 12, 0, 30.0).to_jd() - 0.0005 / 86_400.0;
        let t = UtcInstant::from_jd(jd);
        assert!((t.second - 30.0).abs() < 1e-9);
    }

    #[test]
    fn midnight_carry() {
        let jd = UtcInstant::new(2024, 2, 29, 23, 59, 59.0).to_jd() + 1.0 / 86_400.0;
        let t = UtcInstant::from_jd(jd);
        assert_eq!((t.year, t.month, t.day, t.hour), (2024, 3, 1, 0));
    }

    #[test]
    fn display_iso_z() {
        let t = UtcInstant::new(1990, 1, 15, 6, 30, 0.0);
        assert_eq!(t.to_string(), "1990-01-15T06:30:00Z");
    }

    #[test]
    fn parse_naive_and_zulu() {
        let a: UtcInstant = "2025-12-28T08:30:00".parse().unwrap();
        let b: UtcInstant = "2025-12-28T08:30:00Z".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hour, 8);
    }

    #[test]
    fn parse_with_offset() {
        // 10:30 at +05:30 is 05:00 UTC
        let t: UtcInstant = "2025-12-31T10:30:00+05:30".parse().unwrap();
        assert_eq!((t.hour, t.minute), (5, 0));
        assert_eq!(t.day, 31);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not-a-date".parse::<UtcInstant>().is_err());
        assert!("2025-13-01T00:00:00".parse::<UtcInstant>().is_err());
        assert!("2025-01-01T25:00:00".parse::<UtcInstant>().is_err());
    }

    #[test]
    fn serialize_as_iso_string() {
        let t = UtcInstant::new(2024, 6, 1, 12, 0, 0.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2024-06-01T12:00:00Z\"");
    }
}
