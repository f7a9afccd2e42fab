#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;
    use rand_chacha::ChaCha8Rng;
    use smartbin_dashboard::hooks::use_fleet::{FleetAction, FleetState};
    use smartbin_dashboard::models::{
        bin::{Bin, BinPatch, BinStatus, GeoPoint, WasteType},
        error::AppError,
        flags::SystemFlag,
        metrics::{FleetMetrics, average_fill_level},
        thresholds::{Threshold, ThresholdConfig},
    };
    use smartbin_dashboard::services::registry::{BinRegistry, classify};
    use smartbin_dashboard::services::simulation::simulate_drift;
    use std::rc::Rc;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap()
    }

    // Helper function to create a bin with the given id and fill level
    fn make_bin(id: &str, fill_level: f64) -> Bin {
        Bin {
            id: id.to_string(),
            name: format!("Bin {id}"),
            waste_type: WasteType::Mixed,
            fill_level,
            location: GeoPoint {
                lat: 40.7128,
                lng: -74.0060,
            },
            is_online: true,
            battery_level: 80,
            last_emptied: fixed_now(),
        }
    }

    fn three_bins() -> BinRegistry {
        BinRegistry::new(vec![
            make_bin("BIN001", 85.0),
            make_bin("BIN002", 45.0),
            make_bin("BIN003", 92.0),
        ])
    }

    // ===== Classification Tests =====

    #[test]
    fn test_classify_scenario() {
        let thresholds = ThresholdConfig::new(85, 70, 20).unwrap();
        let registry = three_bins();

        let statuses: Vec<BinStatus> = registry
            .iter()
            .map(|b| classify(b.fill_level, &thresholds))
            .collect();

        assert_eq!(
            statuses,
            vec![BinStatus::Critical, BinStatus::Normal, BinStatus::Critical]
        );
    }

    #[test]
    fn test_classify_is_monotonic() {
        let configs = [
            ThresholdConfig::default(),
            ThresholdConfig::new(50, 30, 5).unwrap(),
            ThresholdConfig::new(100, 90, 50).unwrap(),
            ThresholdConfig::new(75, 70, 20).unwrap(),
        ];

        for thresholds in configs {
            let mut previous = BinStatus::Normal;
            for tenth in 0..=1000 {
                let status = classify(f64::from(tenth) / 10.0, &thresholds);
                assert!(
                    status >= previous,
                    "status went from {previous:?} to {status:?} at {tenth}"
                );
                previous = status;
            }
        }
    }

    // ===== Drift Tests =====

    #[test]
    fn test_drift_always_in_range() {
        let thresholds = ThresholdConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        for start in [0.0, 0.2, 50.0, 99.0, 99.9, 100.0] {
            let bin = make_bin("BIN001", start);
            for _ in 0..500 {
                let drift = simulate_drift(&bin, &thresholds, &mut rng);
                assert!((0.0..=100.0).contains(&drift.fill_level));
            }
        }
    }

    #[test]
    fn test_drift_extreme_draws_are_clamped() {
        let thresholds = ThresholdConfig::default();

        // Smallest possible draw pulls an empty bin below zero
        let mut low = StepRng::new(0, 0);
        let drift = simulate_drift(&make_bin("BIN001", 0.0), &thresholds, &mut low);
        assert_eq!(drift.fill_level, 0.0);
        assert_eq!(drift.status, BinStatus::Normal);

        // Largest possible draw pushes a full bin above 100
        let mut high = StepRng::new(u64::MAX, 0);
        let drift = simulate_drift(&make_bin("BIN001", 100.0), &thresholds, &mut high);
        assert_eq!(drift.fill_level, 100.0);
        assert_eq!(drift.status, BinStatus::Critical);
    }

    #[test]
    fn test_drift_all_touches_every_bin() {
        let mut registry = three_bins();
        let before = registry.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        registry.drift_all(&ThresholdConfig::default(), &mut rng);

        assert_eq!(registry.len(), before.len());
        for (after, before) in registry.iter().zip(before.iter()) {
            assert_eq!(after.id, before.id);
            let delta = after.fill_level - before.fill_level;
            assert!((delta >= -0.5 && delta <= 2.0) || after.fill_level == 100.0);
        }
    }

    // ===== Metrics Tests =====

    #[test]
    fn test_metrics_empty_collection() {
        let metrics = FleetMetrics::compute(&[], &ThresholdConfig::default());

        assert_eq!(metrics.average_fill, 0.0);
        assert_eq!(metrics.critical, 0);
        assert_eq!(metrics, FleetMetrics::default());
        assert_eq!(average_fill_level(&[]), 0.0);
    }

    #[test]
    fn test_metrics_seeded_fleet() {
        let registry = BinRegistry::seeded(fixed_now());
        let metrics = FleetMetrics::compute(registry.bins(), &ThresholdConfig::default());

        assert_eq!(metrics.total, 6);
        assert_eq!(metrics.critical, 2);
        assert_eq!(metrics.moderate, 1);
        assert_eq!(metrics.normal, 3);
        assert_eq!(metrics.online, 5);
        assert_eq!(metrics.offline, 1);
        assert_eq!(metrics.low_battery, 1);
        assert!((metrics.average_fill - 65.0).abs() < 1e-9);
    }

    // ===== Registry Tests =====

    #[test]
    fn test_patch_unknown_id_is_noop() {
        let mut registry = three_bins();
        let before = registry.clone();

        let applied = registry.apply_patch("BIN999", &BinPatch::fill_level(10.0));

        assert!(!applied);
        assert_eq!(registry, before);
    }

    #[test]
    fn test_patch_merges_only_given_fields() {
        let mut registry = three_bins();
        let original = registry.get("BIN002").unwrap().clone();
        let patch = BinPatch {
            name: Some("Park Avenue North".to_string()),
            battery_level: Some(15),
            ..BinPatch::default()
        };

        assert!(registry.apply_patch("BIN002", &patch));

        let patched = registry.get("BIN002").unwrap();
        assert_eq!(patched.name, "Park Avenue North");
        assert_eq!(patched.battery_level, 15);
        assert_eq!(
            *patched,
            Bin {
                name: "Park Avenue North".to_string(),
                battery_level: 15,
                ..original
            }
        );

        // Neighbours untouched, order preserved
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, vec!["BIN001", "BIN002", "BIN003"]);
        assert_eq!(registry.get("BIN001").unwrap(), &make_bin("BIN001", 85.0));
    }

    #[test]
    fn test_patch_fill_level_changes_derived_status() {
        let mut registry = three_bins();
        let thresholds = ThresholdConfig::default();

        registry.apply_patch("BIN002", &BinPatch::fill_level(88.0));

        assert_eq!(
            registry.get("BIN002").unwrap().status(&thresholds),
            BinStatus::Critical
        );
    }

    // ===== Store Tests =====

    #[test]
    fn test_store_unknown_patch_keeps_state() {
        let mut state = FleetState::new(three_bins(), fixed_now());
        let before = state.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = state.apply(
            FleetAction::PatchBin {
                id: "BIN404".to_string(),
                patch: BinPatch::online(false),
            },
            &mut rng,
        );

        assert_eq!(result, Err(AppError::UnknownBin("BIN404".to_string())));
        assert_eq!(state, before);
        assert!(Rc::ptr_eq(&state.registry, &before.registry));
    }

    #[test]
    fn test_store_threshold_change_reclassifies() {
        let mut state = FleetState::new(three_bins(), fixed_now());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(state.metrics().critical, 2);

        state
            .apply(FleetAction::SetThreshold(Threshold::Critical, 95), &mut rng)
            .unwrap();

        let metrics = state.metrics();
        assert_eq!(metrics.critical, 0);
        assert_eq!(metrics.moderate, 2);
    }

    #[test]
    fn test_store_rejected_threshold_keeps_previous_config() {
        let mut state = FleetState::new(three_bins(), fixed_now());
        let before = state.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // Critical dragged below moderate (70)
        let result = state.apply(FleetAction::SetThreshold(Threshold::Critical, 60), &mut rng);
        assert_eq!(
            result,
            Err(AppError::ThresholdOrder {
                critical: 60,
                moderate: 70
            })
        );

        // Off the slider step
        assert!(
            state
                .apply(FleetAction::SetThreshold(Threshold::BatteryWarning, 12), &mut rng)
                .is_err()
        );

        assert_eq!(state, before);
        assert_eq!(state.thresholds.critical_level(), 85);
    }

    #[test]
    fn test_store_patch_with_nan_fill_stays_finite() {
        let mut state = FleetState::new(three_bins(), fixed_now());
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        state
            .apply(
                FleetAction::PatchBin {
                    id: "BIN001".to_string(),
                    patch: BinPatch::fill_level(f64::NAN),
                },
                &mut rng,
            )
            .unwrap();
        state.apply(FleetAction::Tick, &mut rng).unwrap();

        let fill = state.registry.get("BIN001").unwrap().fill_level;
        assert!(fill.is_finite());
        assert!((0.0..=100.0).contains(&fill));
        assert!(state.metrics().average_fill.is_finite());
    }

    #[test]
    fn test_store_tick_drifts_and_counts() {
        let mut state = FleetState::seeded(fixed_now());
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..3 {
            assert!(state.apply(FleetAction::Tick, &mut rng).is_ok());
        }

        assert_eq!(state.ticks, 3);
        assert!(state.registry.iter().all(|b| (0.0..=100.0).contains(&b.fill_level)));
    }

    #[test]
    fn test_store_selection_ignores_unknown_bins() {
        let mut state = FleetState::new(three_bins(), fixed_now());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert!(
            state
                .apply(FleetAction::ToggleSelection("BIN001".to_string()), &mut rng)
                .is_ok()
        );
        assert!(
            state
                .apply(FleetAction::ToggleSelection("BIN777".to_string()), &mut rng)
                .is_err()
        );
        assert_eq!(state.selection.ids(), ["BIN001"]);

        state.apply(FleetAction::ClearSelection, &mut rng).unwrap();
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_store_flag_toggle() {
        let mut state = FleetState::new(three_bins(), fixed_now());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        state
            .apply(FleetAction::ToggleFlag(SystemFlag::RouteOptimization), &mut rng)
            .unwrap();
        assert!(!state.flags.route_optimization);
    }

    #[test]
    fn test_store_repeated_flag_toggles_alternate() {
        let mut state = FleetState::new(three_bins(), fixed_now());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // Shadow copy the hook keeps between renders
        let mut pending = state.flags;

        let first = pending.toggle(SystemFlag::EmergencyMode);
        state
            .apply(FleetAction::ToggleFlag(SystemFlag::EmergencyMode), &mut rng)
            .unwrap();
        let second = pending.toggle(SystemFlag::EmergencyMode);
        state
            .apply(FleetAction::ToggleFlag(SystemFlag::EmergencyMode), &mut rng)
            .unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(pending, state.flags);
        assert!(!state.flags.emergency_mode);
    }

    // ===== Threshold Validation Tests =====

    #[test]
    fn test_threshold_error_display() {
        let error = ThresholdConfig::new(70, 75, 20).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Critical level (70%) must be above moderate level (75%)"
        );

        let error = ThresholdConfig::new(85, 70, 7).unwrap_err();
        assert!(matches!(error, AppError::InvalidThreshold(_)));
    }

    // ===== Serialization Tests =====

    #[test]
    fn test_bin_deserialization() {
        let json = r#"{
            "id": "BIN005",
            "name": "Restaurant District",
            "type": "organic",
            "fillLevel": 67,
            "location": { "lat": 40.7549, "lng": -73.9840 },
            "isOnline": true,
            "batteryLevel": 89,
            "lastEmptied": "2025-10-04T00:00:00Z"
        }"#;

        let bin: Result<Bin, _> = serde_json::from_str(json);
        assert!(bin.is_ok());

        let bin = bin.unwrap();
        assert_eq!(bin.waste_type, WasteType::Organic);
        assert_eq!(bin.fill_level, 67.0);
        assert_eq!(bin.status(&ThresholdConfig::default()), BinStatus::Normal);
    }

    #[test]
    fn test_patch_deserialization_partial() {
        let patch: BinPatch = serde_json::from_str(r#"{ "fillLevel": 12.5 }"#).unwrap();
        assert_eq!(patch, BinPatch::fill_level(12.5));
    }
}
