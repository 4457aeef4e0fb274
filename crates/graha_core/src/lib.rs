//! Core capability interfaces and shared astronomical models.
//!
//! This crate defines the seams between the pure computation layers and
//! their external collaborators:
//! - `EphemerisSource`: tropical geocentric positions for the body roster
//! - `SunriseSource`: sunrise windows over geographic coordinates
//!
//! plus the models every layer shares: the body roster, geographic
//! locations, ayanamsa values, and the mean lunar node.

pub mod ayanamsa;
pub mod body;
pub mod error;
pub mod location;
pub mod lunar_node;
pub mod provider;

pub use ayanamsa::{AyanamsaSystem, KP_MINUS_LAHIRI_DEG, lahiri_approx_deg};
pub use body::{ALL_BODIES, Body};
pub use error::CoreError;
pub use location::GeoLocation;
pub use lunar_node::{NODE_SPEED_DEG_PER_DAY, mean_lunar_node_deg, rahu_ketu_deg};
pub use provider::{BodyPosition, EphemerisSource, SunriseSource, position_of};
