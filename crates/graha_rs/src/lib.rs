//! Convenience wrapper for the graha astrology engine.
//!
//! Composes the computation crates over an ephemeris capability: one call
//! produces a full KP chart (positions + lords + cusps), another seeds a
//! lazy dasha session that can be drilled level by level.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use graha_rs::*;
//!
//! let provider = MyEphemeris::load();
//! let utc: UtcInstant = "2025-12-28T03:00:00Z".parse().unwrap();
//! let location = GeoLocation::new(17.385, 78.4867).unwrap();
//! let chart = chart_for_instant(&provider, &utc, &location, AyanamsaSystem::Kp).unwrap();
//! println!("{}", serde_json::to_string_pretty(&chart).unwrap());
//! ```

pub mod chart;
pub mod session;

pub use chart::{Chart, ChartPlanet, RulingPlanets, chart_for_instant, ruling_planets};
pub use session::{DashaSession, dasha_session};

// Re-export the types callers need so `use graha_rs::*` suffices.
pub use graha_core::{
    ALL_BODIES, AyanamsaSystem, Body, BodyPosition, CoreError, EphemerisSource, GeoLocation,
    SunriseSource,
};
pub use graha_search::{DayElement, Panchangam, SearchError, panchangam_for_day};
pub use graha_time::{
    IST_OFFSET, FixedOffsetResolver, UtcInstant, UtcOffset, ZoneResolver, local_to_utc,
};
pub use graha_vedic::{
    DashaBalance, Dms, HouseCusps, Lord, LordshipTriple, PeriodNode, VedicError, dasha_balance,
    deg_to_dms, placidus_cusps, sub_lords,
};
pub use graha_vedic::dasha::DashaLevel;
