//! Synthetic live-load feed
//!
//! No meter is connected; each reading is a fixed baseline plus uniform noise.

use rand::Rng;

/// Centre of the synthetic feed (MW)
pub const BASELINE_LOAD_MW: i64 = 6500;
/// Maximum deviation from the baseline (MW)
pub const LOAD_JITTER_MW: i64 = 300;

/// Draw one synthetic live-load reading
pub fn sample_live_load<R: Rng>(rng: &mut R) -> i64 {
    BASELINE_LOAD_MW + rng.gen_range(-LOAD_JITTER_MW..=LOAD_JITTER_MW)
}
