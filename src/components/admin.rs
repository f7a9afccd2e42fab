use std::rc::Rc;
use yew::prelude::*;

use super::stat_card::StatCard;
use super::status_badge::StatusBadge;
use super::threshold_slider::ThresholdSlider;
use crate::models::bin::{Bin, BinPatch};
use crate::models::flags::{SystemFlag, SystemFlags};
use crate::models::metrics::FleetMetrics;
use crate::models::selection::Selection;
use crate::models::thresholds::{Threshold, ThresholdConfig};
use crate::services::actions::AdminAction;
use crate::services::registry::BinRegistry;

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub registry: Rc<BinRegistry>,
    pub thresholds: ThresholdConfig,
    pub flags: SystemFlags,
    pub selection: Selection,
    pub metrics: Rc<FleetMetrics>,
    pub on_bin_update: Callback<(String, BinPatch)>,
    pub on_threshold_change: Callback<(Threshold, u8)>,
    pub on_flag_toggle: Callback<SystemFlag>,
    pub on_select: Callback<String>,
    pub on_clear_selection: Callback<()>,
    pub on_action: Callback<AdminAction>,
}

#[function_component(AdminPanel)]
pub fn admin_panel(props: &AdminPanelProps) -> Html {
    let metrics = &props.metrics;

    let action = |action: AdminAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(action.clone()))
    };

    let flag_row = |flag: &SystemFlag| {
        let flag = *flag;
        let onchange = {
            let on_flag_toggle = props.on_flag_toggle.clone();
            Callback::from(move |_| on_flag_toggle.emit(flag))
        };
        html! {
            <div class="flag-row">
                <div>
                    <p class="flag-title">{flag.title()}</p>
                    <p class={classes!("muted", "small", (flag == SystemFlag::EmergencyMode).then_some("danger-text"))}>
                        {flag.description()}
                    </p>
                </div>
                <input type="checkbox" class="switch" checked={props.flags.get(flag)} {onchange} />
            </div>
        }
    };

    html! {
        <div class="surface admin">
            <div class="card-grid three">
                <StatCard title="Online Bins" value={format!("{}/{}", metrics.online, metrics.total)} icon="\u{26a1}" accent="success" />
                <StatCard title="Critical Alerts" value={metrics.critical.to_string()} icon="\u{26a0}\u{fe0f}" accent="warning" />
                <StatCard title="Low Battery" value={metrics.low_battery.to_string()} icon="\u{1f50b}" accent="danger" />
            </div>

            <section class="card">
                <h2>{"System Controls"}</h2>
                <div class="controls-grid">
                    <div>
                        <h3>{"Automation"}</h3>
                        { SystemFlag::automation().iter().map(&flag_row).collect::<Html>() }
                    </div>
                    <div>
                        <h3>{"Alerts & Notifications"}</h3>
                        { SystemFlag::alerting().iter().map(&flag_row).collect::<Html>() }
                    </div>
                </div>

                <div class="thresholds">
                    <h3>{"Threshold Configuration"}</h3>
                    <div class="card-grid three">
                        {
                            Threshold::all().iter().map(|&threshold| html! {
                                <ThresholdSlider
                                    {threshold}
                                    value={props.thresholds.get(threshold)}
                                    on_change={props.on_threshold_change.clone()}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h2>{"Bin Management"}</h2>
                    <div class="button-row">
                        <button
                            class="action"
                            disabled={props.selection.is_empty()}
                            onclick={action(AdminAction::BulkAction)}
                        >
                            {format!("Bulk Actions ({})", props.selection.len())}
                        </button>
                        <button
                            class="action subtle"
                            disabled={props.selection.is_empty()}
                            onclick={props.on_clear_selection.reform(|_: MouseEvent| ())}
                        >
                            {"Clear"}
                        </button>
                    </div>
                </div>
                { props.registry.iter().map(|bin| bin_row(bin, props)).collect::<Html>() }
            </section>

            <div class="card-grid four">
                <button class="action tall" onclick={action(AdminAction::OptimizeRoutes)}>{"\u{1f69a} Optimize Routes"}</button>
                <button class="action tall" onclick={action(AdminAction::ExportData)}>{"\u{2b07}\u{fe0f} Export Data"}</button>
                <button class="action tall" onclick={action(AdminAction::SystemBackup)}>{"\u{2b06}\u{fe0f} Backup System"}</button>
                <button class="action tall" onclick={action(AdminAction::ManageUsers)}>{"\u{1f465} User Management"}</button>
            </div>
        </div>
    }
}

fn bin_row(bin: &Bin, props: &AdminPanelProps) -> Html {
    let id = bin.id.clone();

    let on_select = {
        let on_select = props.on_select.clone();
        let id = id.clone();
        Callback::from(move |_| on_select.emit(id.clone()))
    };

    // Clicking the connectivity dot flips the online flag
    let on_connectivity = {
        let on_bin_update = props.on_bin_update.clone();
        let id = id.clone();
        let is_online = bin.is_online;
        Callback::from(move |_| on_bin_update.emit((id.clone(), BinPatch::online(!is_online))))
    };

    let bin_action = |make: fn(String) -> AdminAction| {
        let on_action = props.on_action.clone();
        let id = id.clone();
        Callback::from(move |_| on_action.emit(make(id.clone())))
    };

    let connectivity = if bin.is_online { "online" } else { "offline" };

    html! {
        <div key={bin.id.clone()} class="bin-row">
            <div class="bin-row-info">
                <input
                    type="checkbox"
                    checked={props.selection.contains(&bin.id)}
                    onchange={on_select}
                />
                <button
                    class={classes!("dot", "connectivity", connectivity)}
                    title={format!("Mark {}", if bin.is_online { "offline" } else { "online" })}
                    onclick={on_connectivity}
                />
                <div>
                    <p class="bin-name">{&bin.name}</p>
                    <p class="muted small">{format!("{} \u{2022} {}", bin.id, bin.waste_type.label().to_lowercase())}</p>
                </div>
            </div>
            <div class="bin-row-status">
                <div class="align-right">
                    <p class="small">{format!("Fill: {:.1}%", bin.fill_level)}</p>
                    <p class={classes!("muted", "small", bin.is_low_battery(&props.thresholds).then_some("danger-text"))}>
                        {format!("Battery: {}%", bin.battery_level)}
                    </p>
                </div>
                <StatusBadge status={bin.status(&props.thresholds)} />
                <button class="icon-button" title="Empty" onclick={bin_action(AdminAction::Empty)}>{"\u{23fb}"}</button>
                <button class="icon-button" title="Restart" onclick={bin_action(AdminAction::Restart)}>{"\u{21bb}"}</button>
            </div>
        </div>
    }
}
