//! Julian Date ↔ Gregorian calendar conversions.
//!
//! All conversions are in UT; leap seconds are not modeled. The engine's
//! contract is second-level precision, which UT arithmetic preserves.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian centuries since J2000.0 for a given JD.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` is the day of month with time-of-day as a fraction
/// (e.g. 15.5 = the 15th at 12:00 UT).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * ((m + 1) as f64)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 {
        (c - 4716.0) as i32
    } else {
        (c - 4715.0) as i32
    };

    (year, month, day)
}

/// Weekday index of the civil day containing `jd`, Monday = 0 .. Sunday = 6.
///
/// The civil day runs midnight to midnight; JD days begin at noon, hence
/// the half-day shift before flooring.
pub fn weekday_from_jd(jd: f64) -> u8 {
    ((jd + 0.5).floor() as i64).rem_euclid(7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_round_trip() {
        // 2000-01-01 12:00 UT = JD 2451545.0
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);

        let (y, m, d) = jd_to_calendar(J2000_JD);
        assert_eq!((y, m), (2000, 1));
        assert!((d - 1.5).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_sputnik() {
        // Meeus 7.a: 1957 October 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn round_trip_arbitrary_dates() {
        for &(y, m, d) in &[
            (1990, 1, 15.270833),
            (2025, 12, 28.354167),
            (1972, 6, 30.999988),
            (2060, 2, 29.5),
        ] {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!((y, m), (y2, m2));
            assert!((d - d2).abs() < 1e-6, "{y}-{m}-{d} -> {d2}");
        }
    }

    #[test]
    fn julian_centuries_at_epoch() {
        assert_eq!(julian_centuries(J2000_JD), 0.0);
        assert!((julian_centuries(J2000_JD + 36_525.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn weekday_known_dates() {
        // 2000-01-01 was a Saturday
        assert_eq!(weekday_from_jd(J2000_JD), 5);
        // 2024-06-01 was a Saturday
        assert_eq!(weekday_from_jd(calendar_to_jd(2024, 6, 1.0)), 5);
        // 2025-12-28 is a Sunday
        assert_eq!(weekday_from_jd(calendar_to_jd(2025, 12, 28.25)), 6);
    }
}
