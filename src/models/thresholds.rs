use super::bin::BinStatus;
use super::error::AppError;
use serde::{Deserialize, Serialize};

/// Bounds and granularity of a threshold slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: u8,
    pub max: u8,
    pub step: u8,
}

impl SliderRange {
    pub const fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max && (value - self.min) % self.step == 0
    }
}

/// The three adjustable thresholds on the admin surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    Critical,
    Moderate,
    BatteryWarning,
}

impl Threshold {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical Level (%)",
            Self::Moderate => "Moderate Level (%)",
            Self::BatteryWarning => "Battery Warning (%)",
        }
    }

    pub const fn range(&self) -> SliderRange {
        match self {
            Self::Critical => SliderRange {
                min: 50,
                max: 100,
                step: 5,
            },
            Self::Moderate => SliderRange {
                min: 30,
                max: 90,
                step: 5,
            },
            Self::BatteryWarning => SliderRange {
                min: 5,
                max: 50,
                step: 5,
            },
        }
    }

    pub const fn all() -> &'static [Self] {
        &[Self::Critical, Self::Moderate, Self::BatteryWarning]
    }
}

/// Threshold configuration used for status classification and battery warnings.
///
/// Fields are private so every instance has passed validation: each value sits
/// on its slider's range and step, and the critical level is strictly above
/// the moderate level. Deserialization goes through the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct ThresholdConfig {
    critical_level: u8,
    moderate_level: u8,
    battery_warning: u8,
}

/// Unchecked wire form of [`ThresholdConfig`]
#[derive(Deserialize)]
struct RawThresholds {
    critical_level: u8,
    moderate_level: u8,
    battery_warning: u8,
}

impl TryFrom<RawThresholds> for ThresholdConfig {
    type Error = AppError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.critical_level, raw.moderate_level, raw.battery_warning)
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            critical_level: 85,
            moderate_level: 70,
            battery_warning: 20,
        }
    }
}

impl ThresholdConfig {
    pub fn new(critical_level: u8, moderate_level: u8, battery_warning: u8) -> Result<Self, AppError> {
        check_range(Threshold::Critical, critical_level)?;
        check_range(Threshold::Moderate, moderate_level)?;
        check_range(Threshold::BatteryWarning, battery_warning)?;

        if critical_level <= moderate_level {
            return Err(AppError::ThresholdOrder {
                critical: critical_level,
                moderate: moderate_level,
            });
        }

        Ok(Self {
            critical_level,
            moderate_level,
            battery_warning,
        })
    }

    /// Returns a copy with one threshold replaced, re-validating the whole config.
    pub fn with(&self, threshold: Threshold, value: u8) -> Result<Self, AppError> {
        match threshold {
            Threshold::Critical => Self::new(value, self.moderate_level, self.battery_warning),
            Threshold::Moderate => Self::new(self.critical_level, value, self.battery_warning),
            Threshold::BatteryWarning => {
                Self::new(self.critical_level, self.moderate_level, value)
            }
        }
    }

    pub const fn get(&self, threshold: Threshold) -> u8 {
        match threshold {
            Threshold::Critical => self.critical_level,
            Threshold::Moderate => self.moderate_level,
            Threshold::BatteryWarning => self.battery_warning,
        }
    }

    pub const fn critical_level(&self) -> u8 {
        self.critical_level
    }

    pub const fn moderate_level(&self) -> u8 {
        self.moderate_level
    }

    pub const fn battery_warning(&self) -> u8 {
        self.battery_warning
    }
}

fn check_range(threshold: Threshold, value: u8) -> Result<(), AppError> {
    let range = threshold.range();
    if range.contains(value) {
        Ok(())
    } else {
        Err(AppError::InvalidThreshold(format!(
            "{} must be between {} and {} in steps of {}, got {}",
            threshold.label(),
            range.min,
            range.max,
            range.step,
            value
        )))
    }
}

/// Classifies a fill level against the thresholds.
///
/// This is the only place status is computed; everything else derives it
/// through here.
pub fn classify(fill_level: f64, thresholds: &ThresholdConfig) -> BinStatus {
    if fill_level >= f64::from(thresholds.critical_level) {
        BinStatus::Critical
    } else if fill_level >= f64::from(thresholds.moderate_level) {
        BinStatus::Moderate
    } else {
        BinStatus::Normal
    }
}
