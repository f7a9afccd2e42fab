use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use rand::Rng;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::bin::BinPatch;
use crate::models::error::AppError;
use crate::models::flags::{SystemFlag, SystemFlags};
use crate::models::metrics::FleetMetrics;
use crate::models::notification::{Notification, seed_notifications};
use crate::models::selection::Selection;
use crate::models::thresholds::{Threshold, ThresholdConfig};
use crate::services::actions::{Acknowledgment, flag_acknowledgment, rejection};
use crate::services::registry::BinRegistry;

/// Everything the surfaces render from. The single owner of the bin collection.
#[derive(Clone, PartialEq, Debug)]
pub struct FleetState {
    pub registry: Rc<BinRegistry>,
    pub thresholds: ThresholdConfig,
    pub flags: SystemFlags,
    pub selection: Selection,
    pub notifications: Rc<Vec<Notification>>,
    /// Drift ticks applied since start
    pub ticks: u64,
}

#[derive(Clone, PartialEq, Debug)]
pub enum FleetAction {
    PatchBin { id: String, patch: BinPatch },
    Tick,
    /// Replaces one threshold; rejected values leave the config untouched
    SetThreshold(Threshold, u8),
    ToggleFlag(SystemFlag),
    ToggleSelection(String),
    ClearSelection,
}

impl FleetState {
    pub fn new(registry: BinRegistry, now: DateTime<Utc>) -> Self {
        Self {
            registry: Rc::new(registry),
            thresholds: ThresholdConfig::default(),
            flags: SystemFlags::default(),
            selection: Selection::default(),
            notifications: Rc::new(seed_notifications(now)),
            ticks: 0,
        }
    }

    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(BinRegistry::seeded(now), now)
    }

    pub fn metrics(&self) -> FleetMetrics {
        FleetMetrics::compute(self.registry.bins(), &self.thresholds)
    }

    /// Applies `action` in place. Actions naming an unknown bin fail with
    /// `AppError::UnknownBin` and leave `self` unchanged.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        action: FleetAction,
        rng: &mut R,
    ) -> Result<(), AppError> {
        match action {
            FleetAction::PatchBin { id, patch } => {
                self.ensure_known(&id)?;
                Rc::make_mut(&mut self.registry).apply_patch(&id, &patch);
            }
            FleetAction::Tick => {
                Rc::make_mut(&mut self.registry).drift_all(&self.thresholds, rng);
                self.ticks += 1;
            }
            FleetAction::SetThreshold(threshold, value) => {
                self.thresholds = self.thresholds.with(threshold, value)?;
            }
            FleetAction::ToggleFlag(flag) => {
                self.flags.toggle(flag);
            }
            FleetAction::ToggleSelection(id) => {
                self.ensure_known(&id)?;
                self.selection.toggle(&id);
            }
            FleetAction::ClearSelection => self.selection.clear(),
        }
        Ok(())
    }

    fn ensure_known(&self, id: &str) -> Result<(), AppError> {
        match self.registry.get(id) {
            Some(_) => Ok(()),
            None => Err(AppError::UnknownBin(id.to_string())),
        }
    }
}

impl Reducible for FleetState {
    type Action = FleetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match next.apply(action, &mut rand::thread_rng()) {
            Ok(()) => Rc::new(next),
            Err(e) => {
                gloo::console::warn!(format!("Ignoring fleet update: {e}"));
                self
            }
        }
    }
}

/// Handle returned by `use_fleet` hook
#[derive(Clone, PartialEq)]
pub struct FleetHandle {
    pub state: UseReducerHandle<FleetState>,
    pub on_bin_update: Callback<(String, BinPatch)>,
    pub set_threshold: Callback<(Threshold, u8)>,
    pub toggle_flag: Callback<SystemFlag>,
    pub toggle_selection: Callback<String>,
    pub clear_selection: Callback<()>,
}

/// Custom hook owning the canonical fleet store and its drift timer.
///
/// `notify` receives acknowledgments for flag toggles and rejected thresholds.
#[hook]
pub fn use_fleet(notify: Callback<Acknowledgment>) -> FleetHandle {
    let state = use_reducer(|| FleetState::seeded(Utc::now()));

    // Effect: drive the simulated drift; the interval is cancelled on unmount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let interval = Config::ENABLE_SIMULATION.then(|| {
                Interval::new(Config::DRIFT_INTERVAL_MS, move || {
                    state.dispatch(FleetAction::Tick);
                })
            });

            move || drop(interval)
        });
    }

    // Log every tenth tick so the console shows the simulation is alive
    {
        let ticks = state.ticks;
        use_effect_with(ticks, move |ticks| {
            if *ticks > 0 && *ticks % 10 == 0 {
                gloo::console::log!(format!("Drift simulation: {ticks} ticks applied"));
            }
            || ()
        });
    }

    let on_bin_update = {
        let state = state.clone();
        Callback::from(move |(id, patch): (String, BinPatch)| {
            state.dispatch(FleetAction::PatchBin { id, patch });
        })
    };

    let set_threshold = {
        let state = state.clone();
        let notify = notify.clone();
        Callback::from(move |(threshold, value): (Threshold, u8)| {
            match state.thresholds.with(threshold, value) {
                Ok(_) => state.dispatch(FleetAction::SetThreshold(threshold, value)),
                Err(e) => {
                    gloo::console::warn!(format!("Rejected threshold change: {e}"));
                    notify.emit(rejection(&e));
                }
            }
        })
    };

    // Flags as they will be once queued toggles are reduced, so rapid
    // toggles between renders each report the right state
    let pending_flags = use_mut_ref(|| state.flags);
    {
        let pending_flags = pending_flags.clone();
        use_effect_with(state.flags, move |flags| {
            *pending_flags.borrow_mut() = *flags;
            || ()
        });
    }

    let toggle_flag = {
        let state = state.clone();
        Callback::from(move |flag: SystemFlag| {
            let enabled = pending_flags.borrow_mut().toggle(flag);
            state.dispatch(FleetAction::ToggleFlag(flag));
            notify.emit(flag_acknowledgment(flag, enabled));
        })
    };

    let toggle_selection = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(FleetAction::ToggleSelection(id)))
    };

    let clear_selection = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(FleetAction::ClearSelection))
    };

    FleetHandle {
        state,
        on_bin_update,
        set_threshold,
        toggle_flag,
        toggle_selection,
        clear_selection,
    }
}
