//! Day-element search: panchangam elements with end instants, found by
//! time bisection inside a sunrise-to-next-sunrise window.

pub mod bisect;
pub mod error;
pub mod panchang;
pub mod types;

pub use bisect::{BISECT_ITERS, bisect_crossing, unwrap_near};
pub use error::SearchError;
pub use panchang::{panchangam_for_day, sun_moon_sidereal_at};
pub use types::{DayElement, Panchangam};
