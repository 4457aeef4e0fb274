//! Time handling for the graha engine: Julian Dates, UTC instants,
//! sidereal time, and local-zone offset resolution.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (UT)
//! - `UtcInstant`, the canonical UTC representation used throughout
//! - Greenwich / local mean sidereal time
//! - Local→UTC conversion through a `ZoneResolver` capability

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;
pub mod zone;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, julian_centuries, weekday_from_jd,
};
pub use sidereal::{gmst_deg, lst_deg};
pub use utc_time::UtcInstant;
pub use zone::{IST_OFFSET, FixedOffsetResolver, UtcOffset, ZoneResolver, local_to_utc};
