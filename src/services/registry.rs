use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::bin::{Bin, BinPatch, GeoPoint, WasteType};
use crate::models::thresholds::ThresholdConfig;
use crate::services::simulation::simulate_drift;

pub use crate::models::thresholds::classify;

/// The canonical bin collection.
///
/// Only the fleet store owns one of these; surfaces read it and request
/// changes through a callback.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BinRegistry {
    bins: Vec<Bin>,
}

impl BinRegistry {
    pub const fn new(bins: Vec<Bin>) -> Self {
        Self { bins }
    }

    /// The six demo bins, with collection times relative to `now`
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(seed_bins(now))
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Bin> {
        self.bins.iter().find(|b| b.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.bins.iter().map(|b| b.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Merges `patch` into the bin with `id`.
    ///
    /// Returns `false` and leaves the collection untouched when no bin has
    /// that id.
    pub fn apply_patch(&mut self, id: &str, patch: &BinPatch) -> bool {
        match self.bins.iter_mut().find(|b| b.id == id) {
            Some(bin) => {
                bin.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Runs one drift step on every bin independently
    pub fn drift_all<R: Rng + ?Sized>(&mut self, thresholds: &ThresholdConfig, rng: &mut R) {
        for bin in &mut self.bins {
            bin.fill_level = simulate_drift(bin, thresholds, rng).fill_level;
        }
    }
}

fn seed_bins(now: DateTime<Utc>) -> Vec<Bin> {
    let bin = |id: &str,
               name: &str,
               waste_type,
               fill_level,
               (lat, lng),
               is_online,
               battery_level,
               emptied_ago: Duration| Bin {
        id: id.to_string(),
        name: name.to_string(),
        waste_type,
        fill_level,
        location: GeoPoint { lat, lng },
        is_online,
        battery_level,
        last_emptied: now - emptied_ago,
    };

    vec![
        bin(
            "BIN001",
            "Main Plaza",
            WasteType::Mixed,
            85.0,
            (40.7128, -74.0060),
            true,
            78,
            Duration::days(2),
        ),
        bin(
            "BIN002",
            "Park Avenue",
            WasteType::Plastic,
            45.0,
            (40.7589, -73.9851),
            true,
            92,
            Duration::days(1),
        ),
        bin(
            "BIN003",
            "Medical Center",
            WasteType::Medical,
            78.0,
            (40.7505, -73.9934),
            true,
            56,
            Duration::hours(3),
        ),
        bin(
            "BIN004",
            "Office Complex",
            WasteType::Paper,
            92.0,
            (40.7614, -73.9776),
            false,
            12,
            Duration::days(4),
        ),
        bin(
            "BIN005",
            "Restaurant District",
            WasteType::Organic,
            67.0,
            (40.7549, -73.9840),
            true,
            89,
            Duration::hours(12),
        ),
        bin(
            "BIN006",
            "Shopping Mall",
            WasteType::Mixed,
            23.0,
            (40.7282, -73.7949),
            true,
            94,
            Duration::hours(6),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bin::BinStatus;
    use chrono::TimeZone;

    fn registry() -> BinRegistry {
        BinRegistry::seeded(Utc.with_ymd_and_hms(2025, 5, 10, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_seed_ids_unique() {
        let reg = registry();
        let mut ids: Vec<&str> = reg.ids().collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), reg.len());
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn test_seed_statuses_under_defaults() {
        let reg = registry();
        let t = ThresholdConfig::default();
        let statuses: Vec<BinStatus> = reg.iter().map(|b| b.status(&t)).collect();
        assert_eq!(
            statuses,
            vec![
                BinStatus::Critical,
                BinStatus::Normal,
                BinStatus::Moderate,
                BinStatus::Critical,
                BinStatus::Normal,
                BinStatus::Normal,
            ]
        );
    }

    #[test]
    fn test_seed_recency_labels() {
        let now = Utc.with_ymd_and_hms(2025, 5, 10, 9, 0, 0).unwrap();
        let reg = BinRegistry::seeded(now);
        let labels: Vec<String> = reg.iter().map(|b| b.last_emptied_label(now)).collect();
        assert_eq!(labels[0], "2 days ago");
        assert_eq!(labels[2], "3 hours ago");
        assert_eq!(labels[4], "12 hours ago");
    }

    #[test]
    fn test_get_by_id() {
        let reg = registry();
        assert_eq!(reg.get("BIN004").map(|b| b.name.as_str()), Some("Office Complex"));
        assert!(reg.get("BIN404").is_none());
    }
}
