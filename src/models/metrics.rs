use super::bin::{Bin, BinStatus};
use super::thresholds::ThresholdConfig;

/// Aggregate view of the fleet, recomputed from the bin collection on demand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FleetMetrics {
    pub total: usize,
    pub normal: usize,
    pub moderate: usize,
    pub critical: usize,
    pub low_battery: usize,
    pub online: usize,
    pub offline: usize,
    pub average_fill: f64,
}

impl FleetMetrics {
    pub fn compute(bins: &[Bin], thresholds: &ThresholdConfig) -> Self {
        let online = online_count(bins);

        Self {
            total: bins.len(),
            normal: count_by_status(bins, thresholds, BinStatus::Normal),
            moderate: count_by_status(bins, thresholds, BinStatus::Moderate),
            critical: count_by_status(bins, thresholds, BinStatus::Critical),
            low_battery: low_battery_count(bins, thresholds),
            online,
            offline: bins.len() - online,
            average_fill: average_fill_level(bins),
        }
    }

    pub const fn count(&self, status: BinStatus) -> usize {
        match status {
            BinStatus::Normal => self.normal,
            BinStatus::Moderate => self.moderate,
            BinStatus::Critical => self.critical,
        }
    }
}

pub fn count_by_status(bins: &[Bin], thresholds: &ThresholdConfig, status: BinStatus) -> usize {
    bins.iter()
        .filter(|b| b.status(thresholds) == status)
        .count()
}

pub fn low_battery_count(bins: &[Bin], thresholds: &ThresholdConfig) -> usize {
    bins.iter().filter(|b| b.is_low_battery(thresholds)).count()
}

pub fn online_count(bins: &[Bin]) -> usize {
    bins.iter().filter(|b| b.is_online).count()
}

/// Mean fill level, 0.0 for an empty collection
pub fn average_fill_level(bins: &[Bin]) -> f64 {
    if bins.is_empty() {
        return 0.0;
    }
    bins.iter().map(|b| b.fill_level).sum::<f64>() / bins.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bin::{GeoPoint, WasteType};
    use chrono::{TimeZone, Utc};

    fn bin(fill_level: f64, battery_level: u8, is_online: bool) -> Bin {
        Bin {
            id: format!("BIN{fill_level}"),
            name: "Test".to_string(),
            waste_type: WasteType::Paper,
            fill_level,
            location: GeoPoint { lat: 0.0, lng: 0.0 },
            is_online,
            battery_level,
            last_emptied: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_count_by_status() {
        let t = ThresholdConfig::default();
        let bins = [bin(10.0, 90, true), bin(70.0, 90, true), bin(84.9, 90, true), bin(85.0, 90, true)];

        assert_eq!(count_by_status(&bins, &t, BinStatus::Normal), 1);
        assert_eq!(count_by_status(&bins, &t, BinStatus::Moderate), 2);
        assert_eq!(count_by_status(&bins, &t, BinStatus::Critical), 1);
    }

    #[test]
    fn test_low_battery_is_strictly_below_warning() {
        let t = ThresholdConfig::default();
        let bins = [bin(10.0, 19, true), bin(10.0, 20, true), bin(10.0, 21, true)];
        assert_eq!(low_battery_count(&bins, &t), 1);
    }

    #[test]
    fn test_online_and_offline() {
        let bins = [bin(10.0, 90, true), bin(20.0, 90, false), bin(30.0, 90, false)];
        assert_eq!(online_count(&bins), 1);

        let metrics = FleetMetrics::compute(&bins, &ThresholdConfig::default());
        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.offline, 2);
        assert!((metrics.average_fill - 20.0).abs() < 1e-9);
        assert_eq!(metrics.count(BinStatus::Normal), 3);
    }

    #[test]
    fn test_empty_collection() {
        let metrics = FleetMetrics::compute(&[], &ThresholdConfig::default());
        assert_eq!(metrics, FleetMetrics::default());
        assert_eq!(average_fill_level(&[]), 0.0);
    }
}
