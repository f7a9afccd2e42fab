/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable the simulated fill-level drift
    pub const ENABLE_SIMULATION: bool = true;

    /// Drift interval in milliseconds (10 seconds)
    pub const DRIFT_INTERVAL_MS: u32 = 10_000;

    /// Lower bound of a single drift step, in fill percentage points
    pub const DRIFT_MIN: f64 = -0.5;

    /// Upper bound (exclusive) of a single drift step
    pub const DRIFT_MAX: f64 = 2.0;

    /// How long an acknowledgment toast stays on screen
    pub const TOAST_DURATION_MS: u32 = 4_000;

    /// Toasts beyond this count push out the oldest
    pub const MAX_TOASTS: usize = 3;

    // Simulated map layout, all in percent of the map box
    pub const MAP_COLUMNS: usize = 3;
    pub const MAP_ORIGIN: f64 = 20.0;
    pub const MAP_COLUMN_SPACING: f64 = 30.0;
    pub const MAP_ROW_SPACING: f64 = 25.0;
    pub const MAP_JITTER: f64 = 10.0;
}
