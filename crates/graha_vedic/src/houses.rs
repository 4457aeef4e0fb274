//! Placidus house cusps (tropical) from time, latitude, and longitude.
//!
//! The four intermediate cusps (11, 12, 9, 8) are solved numerically from
//! the time-based Placidus definition: a cusp is the ecliptic point whose
//! diurnal semi-arc has elapsed a fixed fraction since/before meridian
//! transit. The remaining eight cusps follow from the angles and
//! antipodal symmetry.
//!
//! Output is tropical only. Sidereal conversion (subtract ayanamsa,
//! normalize) belongs to the caller; see [`HouseCusps::sidereal`].

use std::f64::consts::TAU;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use graha_frames::{ecliptic_to_equatorial, mean_obliquity_deg, normalize_deg, wrap_pi};
use graha_time::lst_deg;

/// The 12 house cusps in ecliptic degrees, with the angular aliases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    /// Ascendant, equal to house 1.
    pub asc: f64,
    /// Midheaven, equal to house 10.
    pub mc: f64,
    /// Cusps of houses 1..12, in order.
    pub houses: [f64; 12],
}

impl HouseCusps {
    /// Cusp of house `n` (1-based, 1..=12).
    pub fn house(&self, n: usize) -> f64 {
        self.houses[n - 1]
    }

    /// Convert to sidereal by subtracting an ayanamsa from every entry.
    pub fn sidereal(&self, ayanamsa_deg: f64) -> HouseCusps {
        let mut houses = [0.0; 12];
        for (i, cusp) in self.houses.iter().enumerate() {
            houses[i] = normalize_deg(cusp - ayanamsa_deg);
        }
        HouseCusps {
            asc: normalize_deg(self.asc - ayanamsa_deg),
            mc: normalize_deg(self.mc - ayanamsa_deg),
            houses,
        }
    }
}

impl Serialize for HouseCusps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(14))?;
        map.serialize_entry("asc", &self.asc)?;
        map.serialize_entry("mc", &self.mc)?;
        for (i, cusp) in self.houses.iter().enumerate() {
            map.serialize_entry(&format!("house{}", i + 1), cusp)?;
        }
        map.end()
    }
}

/// Ecliptic longitude of the MC in degrees.
///
/// `atan2(sin θ, cos θ)` of the local sidereal time — the obliquity is
/// deliberately absent (this is the ecliptic MC, not its right
/// ascension projected back).
pub fn mc_longitude_deg(theta_rad: f64) -> f64 {
    normalize_deg(f64::atan2(theta_rad.sin(), theta_rad.cos()).to_degrees())
}

/// Raw closed-form ascendant longitude in degrees.
///
/// Under this LST/longitude convention the result lands 180 degrees from
/// the rising point while the MC is already correct; the cusp assembly
/// flips only the ascendant. Callers wanting the chart ascendant should
/// use [`placidus_cusps`] rather than this raw form.
pub fn asc_longitude_deg(theta_rad: f64, eps_rad: f64, phi_rad: f64) -> f64 {
    let y = -theta_rad.cos();
    let x = theta_rad.sin() * eps_rad.cos() + phi_rad.tan() * eps_rad.sin();
    normalize_deg(f64::atan2(y, x).to_degrees())
}

/// Semi-diurnal arc in radians for a declination at a latitude.
///
/// `acos(-tan φ · tan δ)`, clamped so circumpolar cases return a
/// degenerate 0 or π arc instead of NaN.
fn semi_diurnal_arc(phi_rad: f64, dec_rad: f64) -> f64 {
    (-phi_rad.tan() * dec_rad.tan()).clamp(-1.0, 1.0).acos()
}

/// Placidus residual for a trial ecliptic longitude, radians in (-π, π].
///
/// Zero when the point's hour angle equals the target fraction of its
/// semi-diurnal arc.
fn cusp_residual(lam: f64, theta: f64, eps: f64, phi: f64, frac: f64) -> f64 {
    let (ra, dec) = ecliptic_to_equatorial(lam, 0.0, eps);
    let sda = semi_diurnal_arc(phi, dec);
    let h = wrap_pi(theta - ra);
    wrap_pi(h - frac * sda)
}

/// Solve one Placidus cusp.
///
/// Coarse scan: 49 residual samples 5 degrees apart across guess ±120,
/// keeping the smallest magnitude. Refinement: secant iteration from a
/// ±2 degree bracket around the best sample, at most 40 steps, stopping
/// below 1e-11 rad. Non-convergence is not fatal — the best iterate is
/// the answer.
fn solve_cusp(theta: f64, eps: f64, phi: f64, guess_deg: f64, frac: f64) -> f64 {
    let guess = normalize_deg(guess_deg).to_radians();
    let f = |lam: f64| cusp_residual(lam, theta, eps, phi, frac);

    let mut best = guess;
    let mut best_val = f64::MAX;
    let mut k = -120i64;
    while k <= 120 {
        let lam = (guess + (k as f64).to_radians()).rem_euclid(TAU);
        let v = f(lam).abs();
        if v < best_val {
            best_val = v;
            best = lam;
        }
        k += 5;
    }

    let mut x0 = (best - 2.0_f64.to_radians()).rem_euclid(TAU);
    let mut x1 = (best + 2.0_f64.to_radians()).rem_euclid(TAU);
    let mut y0 = f(x0);
    let mut y1 = f(x1);

    for _ in 0..40 {
        let den = y1 - y0;
        if den.abs() < 1e-14 {
            break;
        }
        let x2 = (x1 - y1 * (x1 - x0) / den).rem_euclid(TAU);
        let y2 = f(x2);
        x0 = x1;
        y0 = y1;
        x1 = x2;
        y1 = y2;
        if y1.abs() < 1e-11 {
            break;
        }
    }

    normalize_deg(x1.to_degrees())
}

/// Placidus cusps from pre-computed angles (all radians).
///
/// `theta` is the local sidereal time, `eps` the obliquity, `phi` the
/// geographic latitude.
pub fn placidus_from_lst(theta: f64, eps: f64, phi: f64) -> HouseCusps {
    let raw_asc = asc_longitude_deg(theta, eps, phi);
    let mc = mc_longitude_deg(theta);
    let asc = normalize_deg(raw_asc + 180.0);

    // Toward houses 11/12: guesses MC-30/MC-60, fractions -1/3 and -2/3.
    let h11 = solve_cusp(theta, eps, phi, mc - 30.0, -1.0 / 3.0);
    let h12 = solve_cusp(theta, eps, phi, mc - 60.0, -2.0 / 3.0);
    // Toward houses 9/8: guesses MC+30/MC+60, fractions +1/3 and +2/3.
    let h9 = solve_cusp(theta, eps, phi, mc + 30.0, 1.0 / 3.0);
    let h8 = solve_cusp(theta, eps, phi, mc + 60.0, 2.0 / 3.0);

    let h4 = normalize_deg(mc + 180.0);
    let h5 = normalize_deg(h11 + 180.0);
    let h6 = normalize_deg(h12 + 180.0);
    let h7 = normalize_deg(asc + 180.0);
    let h2 = normalize_deg(h8 + 180.0);
    let h3 = normalize_deg(h9 + 180.0);

    HouseCusps {
        asc,
        mc,
        houses: [asc, h2, h3, h4, h5, h6, h7, h8, h9, mc, h11, h12],
    }
}

/// Placidus cusps (tropical) for a JD (UT) and observer coordinates.
///
/// Longitude is east positive.
pub fn placidus_cusps(jd_ut: f64, lat_deg: f64, lon_east_deg: f64) -> HouseCusps {
    let eps = mean_obliquity_deg(jd_ut).to_radians();
    let phi = lat_deg.to_radians();
    let theta = lst_deg(jd_ut, lon_east_deg).to_radians();
    placidus_from_lst(theta, eps, phi)
}
