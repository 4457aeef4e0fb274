//! Lazy dasha session: seed once from the Moon, then materialize only
//! the level a caller asks for.

use serde::Serialize;

use graha_core::{AyanamsaSystem, Body, CoreError, EphemerisSource, GeoLocation, position_of};
use graha_frames::normalize_deg;
use graha_time::UtcInstant;
use graha_vedic::dasha::DashaLevel;
use graha_vedic::{
    DashaBalance, PeriodNode, VedicError, build_level_nodes, build_mahadasha_list,
    build_period_tree, build_timeline, dasha_balance, lord_from_name,
};

/// Everything needed to build dasha periods without re-querying the
/// ephemeris: the entry lord and balance, anchored at the birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaSession {
    pub start: UtcInstant,
    #[serde(rename = "jdUt")]
    pub jd_ut: f64,
    #[serde(rename = "ayanamsaValueDeg")]
    pub ayanamsa_deg: f64,
    #[serde(rename = "moonSidereal")]
    pub moon_sidereal: f64,
    #[serde(flatten)]
    pub entry: DashaBalance,
}

/// Seed a dasha session from the Moon's position at an instant.
pub fn dasha_session(
    provider: &dyn EphemerisSource,
    utc: &UtcInstant,
    location: &GeoLocation,
    system: AyanamsaSystem,
) -> Result<DashaSession, CoreError> {
    let jd_ut = utc.to_jd();
    let ayanamsa_deg = system.value_deg(jd_ut);

    let positions = provider.positions(utc, location)?;
    let moon = position_of(&positions, Body::Moon)?;
    let moon_sidereal = normalize_deg(moon.lon_deg - ayanamsa_deg);

    Ok(DashaSession {
        start: *utc,
        jd_ut,
        ayanamsa_deg,
        moon_sidereal,
        entry: dasha_balance(moon_sidereal),
    })
}

impl DashaSession {
    /// The 9-mahadasha top-level timeline, first entry partial.
    pub fn mahadashas(&self) -> Vec<PeriodNode> {
        build_mahadasha_list(
            self.start.to_jd(),
            self.entry.lord,
            Some(self.entry.balance_years),
        )
    }

    /// One mahadasha's eager subtree, depth 1..=5.
    pub fn tree(&self, max_levels: u8) -> PeriodNode {
        build_period_tree(
            self.start.to_jd(),
            self.entry.lord,
            Some(self.entry.balance_years),
            max_levels,
        )
    }

    /// Full-depth trees covering the 120-year horizon.
    pub fn timeline(&self, max_levels: u8) -> Vec<PeriodNode> {
        build_timeline(
            self.start.to_jd(),
            self.entry.lord,
            Some(self.entry.balance_years),
            max_levels,
        )
    }

    /// Materialize one level inside a caller-supplied window.
    ///
    /// The lord arrives by name from the calling layer and is validated
    /// here: an unknown name fails before any node is built.
    pub fn level(
        &self,
        level: DashaLevel,
        start: &UtcInstant,
        end: &UtcInstant,
        lord_name: &str,
    ) -> Result<Vec<PeriodNode>, VedicError> {
        let lord = lord_from_name(lord_name)?;
        Ok(build_level_nodes(level, start.to_jd(), end.to_jd(), lord))
    }
}
