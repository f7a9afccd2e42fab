use chrono::Utc;
use std::rc::Rc;
use yew::prelude::*;

use super::stat_card::{Progress, StatCard};
use super::status_badge::StatusBadge;
use crate::hooks::use_tab::Tab;
use crate::models::metrics::FleetMetrics;
use crate::models::notification::Notification;
use crate::models::thresholds::ThresholdConfig;
use crate::services::actions::AdminAction;
use crate::services::registry::BinRegistry;
use crate::utils::relative_time::time_ago;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub registry: Rc<BinRegistry>,
    pub thresholds: ThresholdConfig,
    pub metrics: Rc<FleetMetrics>,
    pub notifications: Rc<Vec<Notification>>,
    pub on_action: Callback<AdminAction>,
    pub on_navigate: Callback<Tab>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let now = Utc::now();
    let metrics = &props.metrics;

    let action = |action: AdminAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(action.clone()))
    };
    let navigate = |tab: Tab| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(tab))
    };

    html! {
        <div class="surface dashboard">
            <div class="card-grid four">
                <StatCard title="Total Bins" value={metrics.total.to_string()} icon="\u{1f5d1}\u{fe0f}" accent="primary">
                    <div class="badge-row">
                        <span class="badge status-critical">{format!("{} Critical", metrics.critical)}</span>
                        <span class="badge status-moderate">{format!("{} Moderate", metrics.moderate)}</span>
                    </div>
                </StatCard>
                <StatCard title="Avg Fill Level" value={format!("{:.1}%", metrics.average_fill)} icon="\u{1f4ca}" accent="success">
                    <Progress value={metrics.average_fill} />
                </StatCard>
                <StatCard title="Active Routes" value="3" icon="\u{1f69a}" accent="warning">
                    <p class="muted">{"2 trucks active, 1 optimizing"}</p>
                </StatCard>
                <StatCard title="CO\u{2082} Saved" value="2.4t" icon="\u{267b}\u{fe0f}" accent="success">
                    <p class="muted">{"+12% vs last month"}</p>
                </StatCard>
            </div>

            <div class="dashboard-main">
                <section class="card bin-list">
                    <h2>{"Smart Bins Status"}</h2>
                    {
                        props.registry.iter().map(|bin| html! {
                            <div key={bin.id.clone()} class="bin-row">
                                <div class="bin-row-info">
                                    <span class={classes!("swatch", bin.waste_type.css_class())}></span>
                                    <div>
                                        <p class="bin-name">{&bin.name}</p>
                                        <p class="muted">{format!("ID: {} \u{2022} {} waste", bin.id, bin.waste_type.label())}</p>
                                    </div>
                                </div>
                                <div class="bin-row-status">
                                    <div class="align-right">
                                        <p class="bin-fill">{format!("{:.1}%", bin.fill_level)}</p>
                                        <p class="muted small">{format!("Last: {}", bin.last_emptied_label(now))}</p>
                                    </div>
                                    <StatusBadge status={bin.status(&props.thresholds)} />
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </section>

                <div class="dashboard-side">
                    <section class="card alerts">
                        <h2>{"Recent Alerts"}</h2>
                        {
                            props.notifications.iter().map(|n| html! {
                                <div key={n.id} class={classes!("alert", n.severity.css_class())}>
                                    <span class="alert-icon">{n.severity.icon()}</span>
                                    <div>
                                        <p>{&n.message}</p>
                                        <p class="muted small">{time_ago(n.raised_at, now)}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </section>

                    <section class="card quick-actions">
                        <h2>{"Quick Actions"}</h2>
                        <button class="action" onclick={action(AdminAction::OptimizeRoutes)}>{"\u{1f69a} Optimize Routes"}</button>
                        <button class="action" onclick={action(AdminAction::DispatchTeam)}>{"\u{1f465} Dispatch Team"}</button>
                        <button class="action" onclick={navigate(Tab::Analytics)}>{"\u{1f4c8} View Analytics"}</button>
                        <button class="action" onclick={navigate(Tab::Admin)}>{"\u{2699}\u{fe0f} System Control"}</button>
                    </section>
                </div>
            </div>
        </div>
    }
}
