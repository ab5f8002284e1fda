//! Catch difficulty
//!
//! Stronger pokemon (higher base experience) are harder to catch.

use rand::Rng;

/// Lowest base experience in the games
pub const MIN_BASE_EXPERIENCE: u32 = 36;
/// Highest base experience in the games
pub const MAX_BASE_EXPERIENCE: u32 = 635;

const EASIEST_PASS_RATE: f64 = 0.9;
const HARDEST_PASS_RATE: f64 = 0.1;

/// Probability of a successful catch, from 0.9 for the weakest pokemon down to
/// 0.1 for the strongest. Values outside the known range are clamped.
pub fn catch_rate(base_experience: u32) -> f64 {
    let span = f64::from(MAX_BASE_EXPERIENCE - MIN_BASE_EXPERIENCE);
    let normalized = (f64::from(base_experience) - f64::from(MIN_BASE_EXPERIENCE)) / span;
    let normalized = normalized.clamp(0.0, 1.0);

    EASIEST_PASS_RATE - normalized * (EASIEST_PASS_RATE - HARDEST_PASS_RATE)
}

/// Rolls a catch attempt against `base_experience`.
pub fn attempt_catch<R: Rng + ?Sized>(base_experience: u32, rng: &mut R) -> bool {
    rng.random::<f64>() < catch_rate(base_experience)
}
