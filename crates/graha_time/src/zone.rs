//! Local→UTC conversion through a zone-resolution capability.
//!
//! Time-zone databases are an external concern: the engine only needs a
//! UTC offset for a named zone at a given local time. Callers supply a
//! `ZoneResolver`; when resolution fails the conversion falls back to the
//! fixed +05:30 offset.

use crate::julian::SECONDS_PER_DAY;
use crate::utc_time::UtcInstant;

/// A signed UTC offset in seconds, east positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// Offset from signed hours and minutes (both carry the sign).
    pub const fn from_hm(hours: i32, minutes: i32) -> Self {
        Self {
            seconds: hours * 3600 + minutes * 60,
        }
    }

    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    pub const fn seconds(self) -> i32 {
        self.seconds
    }
}

/// Fallback offset when a zone name cannot be resolved: +05:30.
pub const IST_OFFSET: UtcOffset = UtcOffset::from_hm(5, 30);

/// Capability for resolving an IANA zone name to a UTC offset.
///
/// Implementations may consult a full tz database; the engine itself
/// never does. Returning `None` signals "unknown zone".
pub trait ZoneResolver {
    fn utc_offset(&self, zone: &str, local: &UtcInstant) -> Option<UtcOffset>;
}

/// Resolver that answers every query with one fixed offset.
///
/// Useful for tests and single-zone deployments.
#[derive(Debug, Clone, Copy)]
pub struct FixedOffsetResolver {
    pub offset: UtcOffset,
}

impl ZoneResolver for FixedOffsetResolver {
    fn utc_offset(&self, _zone: &str, _local: &UtcInstant) -> Option<UtcOffset> {
        Some(self.offset)
    }
}

/// Convert a local wall-clock timestamp to UTC.
///
/// Falls back to [`IST_OFFSET`] when the resolver does not know the zone.
pub fn local_to_utc(local: &UtcInstant, zone: &str, resolver: &dyn ZoneResolver) -> UtcInstant {
    let offset = resolver.utc_offset(zone, local).unwrap_or(IST_OFFSET);
    UtcInstant::from_jd(local.to_jd() - offset.seconds() as f64 / SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ist_offset_seconds() {
        assert_eq!(IST_OFFSET.seconds(), 19_800);
    }

    #[test]
    fn negative_offset() {
        assert_eq!(UtcOffset::from_hm(-5, 0).seconds(), -18_000);
    }

    #[test]
    fn local_to_utc_with_resolver() {
        let resolver = FixedOffsetResolver {
            offset: UtcOffset::from_hm(5, 30),
        };
        let local = UtcInstant::new(2025, 12, 31, 10, 30, 0.0);
        let utc = local_to_utc(&local, "Asia/Kolkata", &resolver);
        assert_eq!((utc.hour, utc.minute), (5, 0));
    }

    #[test]
    fn unknown_zone_falls_back_to_ist() {
        struct NoZones;
        impl ZoneResolver for NoZones {
            fn utc_offset(&self, _: &str, _: &UtcInstant) -> Option<UtcOffset> {
                None
            }
        }
        let local = UtcInstant::new(2025, 12, 31, 10, 30, 0.0);
        let utc = local_to_utc(&local, "Nowhere/Imaginary", &NoZones);
        assert_eq!((utc.hour, utc.minute), (5, 0));
    }
}
