use rand::Rng;

use crate::config::Config;
use crate::models::bin::{Bin, BinStatus};
use crate::models::thresholds::{ThresholdConfig, classify};

/// Result of one drift step for a single bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub fill_level: f64,
    pub status: BinStatus,
}

/// One step of the simulated fill-level random walk.
///
/// Adds a uniform draw from `[DRIFT_MIN, DRIFT_MAX)` and clamps to `[0, 100]`,
/// so bins slowly fill up (mean step +0.75). Status is re-derived through
/// [`classify`]. The caller decides when to run it; this function has no
/// notion of time.
pub fn simulate_drift<R: Rng + ?Sized>(
    bin: &Bin,
    thresholds: &ThresholdConfig,
    rng: &mut R,
) -> Drift {
    let step = rng.gen_range(Config::DRIFT_MIN..Config::DRIFT_MAX);
    let fill_level = (bin.fill_level + step).clamp(0.0, 100.0);

    Drift {
        fill_level,
        status: classify(fill_level, thresholds),
    }
}
