use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::thresholds::{ThresholdConfig, classify};
use crate::utils::relative_time::time_ago;

/// Waste stream a bin collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteType {
    Mixed,
    Plastic,
    Organic,
    Medical,
    Paper,
}

impl WasteType {
    /// Returns CSS class name for the waste-type colour swatch
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Mixed => "waste-mixed",
            Self::Plastic => "waste-plastic",
            Self::Organic => "waste-organic",
            Self::Medical => "waste-medical",
            Self::Paper => "waste-paper",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mixed => "Mixed",
            Self::Plastic => "Plastic",
            Self::Organic => "Organic",
            Self::Medical => "Medical",
            Self::Paper => "Paper",
        }
    }
}

/// Fill status derived from fill level and the current thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinStatus {
    Normal,
    Moderate,
    Critical,
}

impl BinStatus {
    /// Returns CSS class name for status colour coding
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Normal => "status-normal",
            Self::Moderate => "status-moderate",
            Self::Critical => "status-critical",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Moderate => "moderate",
            Self::Critical => "critical",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[Self::Normal, Self::Moderate, Self::Critical]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A monitored waste receptacle.
///
/// Status is not a field: call [`Bin::status`] with the thresholds in force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub waste_type: WasteType,
    pub fill_level: f64,
    pub location: GeoPoint,
    pub is_online: bool,
    pub battery_level: u8,
    pub last_emptied: DateTime<Utc>,
}

impl Bin {
    pub fn status(&self, thresholds: &ThresholdConfig) -> BinStatus {
        classify(self.fill_level, thresholds)
    }

    pub fn is_low_battery(&self, thresholds: &ThresholdConfig) -> bool {
        self.battery_level < thresholds.battery_warning()
    }

    /// Human-readable recency of the last collection, e.g. "2 days ago"
    pub fn last_emptied_label(&self, now: DateTime<Utc>) -> String {
        time_ago(self.last_emptied, now)
    }

    /// Merges every present field of `patch` into this bin.
    pub fn apply(&mut self, patch: &BinPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(waste_type) = patch.waste_type {
            self.waste_type = waste_type;
        }
        // Non-finite readings are dropped; NaN would survive clamp
        if let Some(fill_level) = patch.fill_level.filter(|f| f.is_finite()) {
            self.fill_level = fill_level.clamp(0.0, 100.0);
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(is_online) = patch.is_online {
            self.is_online = is_online;
        }
        if let Some(battery_level) = patch.battery_level {
            self.battery_level = battery_level.min(100);
        }
        if let Some(last_emptied) = patch.last_emptied {
            self.last_emptied = last_emptied;
        }
    }
}

/// Partial update for a [`Bin`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BinPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub waste_type: Option<WasteType>,
    pub fill_level: Option<f64>,
    pub location: Option<GeoPoint>,
    pub is_online: Option<bool>,
    pub battery_level: Option<u8>,
    pub last_emptied: Option<DateTime<Utc>>,
}

impl BinPatch {
    pub fn fill_level(fill_level: f64) -> Self {
        Self {
            fill_level: Some(fill_level),
            ..Self::default()
        }
    }

    pub fn online(is_online: bool) -> Self {
        Self {
            is_online: Some(is_online),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
