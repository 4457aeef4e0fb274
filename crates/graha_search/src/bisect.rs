//! Time bisection for angular threshold crossings.
//!
//! The angular functions searched here wrap at 360°; callers unwrap
//! samples relative to the window-start value so the function is
//! monotone across the window and safe to bisect.

use crate::error::SearchError;

/// Bisection iteration budget. 44 halvings of a one-day window resolve
/// far below a second.
pub const BISECT_ITERS: u32 = 44;

/// Shift a wrapped angle to the branch nearest `reference`.
pub fn unwrap_near(x: f64, reference: f64) -> f64 {
    let d = x - reference;
    if d < -180.0 {
        x + 360.0
    } else if d > 180.0 {
        x - 360.0
    } else {
        x
    }
}

/// Find where a monotone function crosses `target` between `t0` and `t1`.
///
/// If the endpoint values do not bracket the target the crossing lies
/// outside the window; `t1` is returned unchanged to mean "no crossing
/// here". Otherwise the interval is halved `iters` times and the upper
/// bound returned.
pub fn bisect_crossing<F>(f: F, target: f64, t0: f64, t1: f64, iters: u32) -> Result<f64, SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    let fa = f(t0)?;
    let fb = f(t1)?;
    if !((fa <= target && target <= fb) || (fb <= target && target <= fa)) {
        return Ok(t1);
    }

    let mut a = t0;
    let mut b = t1;
    for _ in 0..iters {
        let mid = a + (b - a) / 2.0;
        if f(mid)? < target {
            a = mid;
        } else {
            b = mid;
        }
    }
    Ok(b)
}
