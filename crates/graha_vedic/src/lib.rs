//! Vedic/KP computation core: lords, sub-lord lattice, Vimshottari dasha
//! periods, Placidus house cusps, and panchanga classifiers.
//!
//! Everything in this crate is a pure function of its inputs — no
//! ephemeris access, no I/O, no shared state. Sidereal longitudes are
//! the caller's responsibility (tropical minus ayanamsa).

pub mod balance;
pub mod dasha;
pub mod error;
pub mod houses;
pub mod lord;
pub mod panchanga;
pub mod ruling;
pub mod sublord;
pub mod util;

pub use balance::{DashaBalance, dasha_balance};
pub use dasha::{
    DAYS_PER_YEAR, DashaLevel, PeriodNode, build_level_nodes, build_mahadasha_list,
    build_period_tree, build_timeline, days_of_years, lord_from_name,
};
pub use error::VedicError;
pub use houses::{
    HouseCusps, asc_longitude_deg, mc_longitude_deg, placidus_cusps, placidus_from_lst,
};
pub use lord::{ALL_LORDS, Lord, TOTAL_VIMSHOTTARI_YEARS};
pub use panchanga::{
    KARANA_SPAN_DEG, KaranaPosition, NAKSHATRA_NAMES, NakshatraPosition, TITHI_NAMES,
    TITHI_SPAN_DEG, TithiPosition, VAARA_NAMES, YOGA_NAMES, YogaPosition, karana_from_elongation,
    nakshatra_from_longitude, tithi_from_elongation, yoga_from_sum,
};
pub use ruling::{SIGN_LORDS, WEEKDAY_LORDS, day_lord, sign_lord};
pub use sublord::{LordshipTriple, NAKSHATRA_SPAN_DEG, star_lord, sub_lords};
pub use util::{Dms, deg_to_dms};
