//! Full KP chart assembly over an ephemeris capability.

use serde::Serialize;

use graha_core::{
    AyanamsaSystem, Body, CoreError, EphemerisSource, GeoLocation, NODE_SPEED_DEG_PER_DAY,
    mean_lunar_node_deg, position_of, rahu_ketu_deg,
};
use graha_frames::normalize_deg;
use graha_time::{UtcInstant, weekday_from_jd};
use graha_vedic::{
    DashaBalance, Dms, HouseCusps, Lord, LordshipTriple, dasha_balance, day_lord, deg_to_dms,
    placidus_cusps, sign_lord, sub_lords,
};

/// One chart entry: a body with its sidereal placement and KP lords.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPlanet {
    pub name: &'static str,
    #[serde(rename = "lonTropical")]
    pub lon_tropical: f64,
    #[serde(rename = "lonSidereal")]
    pub lon_sidereal: f64,
    /// Sidereal longitude broken into degree/minute/second.
    pub longitude: Dms,
    #[serde(rename = "latDeg")]
    pub lat_deg: f64,
    #[serde(rename = "distAu")]
    pub dist_au: f64,
    #[serde(rename = "speedLon")]
    pub speed_lon: f64,
    #[serde(rename = "retro")]
    pub retrograde: bool,
    #[serde(flatten)]
    pub lords: LordshipTriple,
}

/// A complete KP chart for one instant and location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub utc: UtcInstant,
    #[serde(rename = "jdUt")]
    pub jd_ut: f64,
    pub ayanamsa: AyanamsaSystem,
    #[serde(rename = "ayanamsaValueDeg")]
    pub ayanamsa_deg: f64,
    /// The 10 roster bodies plus Rahu and Ketu, in roster order.
    pub planets: Vec<ChartPlanet>,
    #[serde(rename = "cuspsTropical")]
    pub cusps_tropical: HouseCusps,
    #[serde(rename = "cuspsSidereal")]
    pub cusps_sidereal: HouseCusps,
    /// Vimshottari entry point from the Moon.
    #[serde(rename = "dashaEntry")]
    pub dasha_entry: DashaBalance,
}

fn chart_planet(
    name: &'static str,
    lon_tropical: f64,
    lat_deg: f64,
    dist_au: f64,
    speed_lon: f64,
    ayanamsa_deg: f64,
) -> ChartPlanet {
    let lon_sidereal = normalize_deg(lon_tropical - ayanamsa_deg);
    ChartPlanet {
        name,
        lon_tropical: normalize_deg(lon_tropical),
        lon_sidereal,
        longitude: deg_to_dms(lon_sidereal),
        lat_deg,
        dist_au,
        speed_lon,
        retrograde: speed_lon < 0.0,
        lords: sub_lords(lon_sidereal),
    }
}

/// Assemble the full chart: positions, node pair, KP lords, cusps, and
/// the dasha entry.
pub fn chart_for_instant(
    provider: &dyn EphemerisSource,
    utc: &UtcInstant,
    location: &GeoLocation,
    system: AyanamsaSystem,
) -> Result<Chart, CoreError> {
    let jd_ut = utc.to_jd();
    let ayanamsa_deg = system.value_deg(jd_ut);

    let positions = provider.positions(utc, location)?;
    let moon = position_of(&positions, Body::Moon)?;
    let moon_sidereal = normalize_deg(moon.lon_deg - ayanamsa_deg);

    let mut planets = Vec::with_capacity(positions.len() + 2);
    for p in &positions {
        planets.push(chart_planet(
            p.body.name(),
            p.lon_deg,
            p.lat_deg,
            p.dist_au,
            p.speed_lon,
            ayanamsa_deg,
        ));
    }

    // Rahu/Ketu from the mean node; always retrograde.
    let (rahu_trop, ketu_trop) = rahu_ketu_deg(mean_lunar_node_deg(jd_ut));
    for (name, lon) in [("Rahu", rahu_trop), ("Ketu", ketu_trop)] {
        planets.push(chart_planet(
            name,
            lon,
            0.0,
            0.0,
            NODE_SPEED_DEG_PER_DAY,
            ayanamsa_deg,
        ));
    }

    let cusps_tropical = placidus_cusps(jd_ut, location.latitude_deg, location.longitude_deg);
    let cusps_sidereal = cusps_tropical.sidereal(ayanamsa_deg);

    Ok(Chart {
        utc: *utc,
        jd_ut,
        ayanamsa: system,
        ayanamsa_deg,
        planets,
        cusps_tropical,
        cusps_sidereal,
        dasha_entry: dasha_balance(moon_sidereal),
    })
}

/// The ruling-planet summary for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RulingPlanets {
    #[serde(rename = "dayLord")]
    pub day_lord: Lord,
    #[serde(rename = "moonSignLord")]
    pub moon_sign_lord: Lord,
    #[serde(rename = "ascSignLord")]
    pub asc_sign_lord: Lord,
    #[serde(rename = "ascStarLord")]
    pub asc_star_lord: Lord,
}

/// Derive the ruling planets from an assembled chart.
pub fn ruling_planets(chart: &Chart) -> Result<RulingPlanets, CoreError> {
    let moon = chart
        .planets
        .iter()
        .find(|p| p.name == "Moon")
        .ok_or(CoreError::MissingBody("Moon"))?;
    let asc = chart.cusps_sidereal.asc;

    Ok(RulingPlanets {
        day_lord: day_lord(weekday_from_jd(chart.jd_ut)),
        moon_sign_lord: sign_lord(moon.lon_sidereal),
        asc_sign_lord: sign_lord(asc),
        asc_star_lord: sub_lords(asc).star,
    })
}
