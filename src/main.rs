use yew::prelude::*;

use smartbin_dashboard::components::{
    AdminPanel, Analytics, BinMap, Dashboard, TabBar, ToastStack,
};
use smartbin_dashboard::hooks::use_fleet::use_fleet;
use smartbin_dashboard::hooks::use_tab::{Tab, use_tab};
use smartbin_dashboard::hooks::use_toasts::use_toasts;
use smartbin_dashboard::models::metrics::FleetMetrics;
use smartbin_dashboard::services::actions::{AdminAction, acknowledge};

#[function_component(App)]
fn app() -> Html {
    let toasts = use_toasts();
    let fleet = use_fleet(toasts.push.clone());
    let tab = use_tab();

    let state = &*fleet.state;

    // Selector: metrics only recompute when bins or thresholds change
    let metrics = use_memo(
        (state.registry.clone(), state.thresholds),
        |(registry, thresholds)| FleetMetrics::compute(registry.bins(), thresholds),
    );

    let on_action = {
        let push = toasts.push.clone();
        let selected = state.selection.len();
        Callback::from(move |action: AdminAction| push.emit(acknowledge(&action, selected)))
    };

    let surface = match tab.tab {
        Tab::Dashboard => html! {
            <Dashboard
                registry={state.registry.clone()}
                thresholds={state.thresholds}
                metrics={metrics.clone()}
                notifications={state.notifications.clone()}
                on_action={on_action.clone()}
                on_navigate={tab.set_tab.clone()}
            />
        },
        Tab::Map => html! {
            <BinMap
                registry={state.registry.clone()}
                thresholds={state.thresholds}
                on_action={on_action.clone()}
                on_navigate={tab.set_tab.clone()}
            />
        },
        Tab::Analytics => html! {
            <Analytics registry={state.registry.clone()} />
        },
        Tab::Admin => html! {
            <AdminPanel
                registry={state.registry.clone()}
                thresholds={state.thresholds}
                flags={state.flags}
                selection={state.selection.clone()}
                metrics={metrics.clone()}
                on_bin_update={fleet.on_bin_update.clone()}
                on_threshold_change={fleet.set_threshold.clone()}
                on_flag_toggle={fleet.toggle_flag.clone()}
                on_select={fleet.toggle_selection.clone()}
                on_clear_selection={fleet.clear_selection.clone()}
                on_action={on_action.clone()}
            />
        },
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"\u{1f5d1}\u{fe0f} Smart Bin IoT"}</h1>
                <p class="muted">{"Waste Management Dashboard with Simulated Real-time Monitoring"}</p>
            </header>

            <TabBar active={tab.tab} on_select={tab.set_tab.clone()} />

            <main class="app-main">
                {surface}
            </main>

            <ToastStack
                toasts={toasts.queue.toasts.clone()}
                on_dismiss={toasts.dismiss.clone()}
            />

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
