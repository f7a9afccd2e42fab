use chrono::Utc;
use std::rc::Rc;
use yew::prelude::*;

use super::status_badge::StatusBadge;
use crate::models::bin::{Bin, BinStatus};
use crate::hooks::use_tab::Tab;
use crate::models::thresholds::ThresholdConfig;
use crate::services::actions::AdminAction;
use crate::services::layout::{MapPosition, fill_ring_dasharray, layout};
use crate::services::registry::BinRegistry;

#[derive(Properties, PartialEq)]
pub struct BinMapProps {
    pub registry: Rc<BinRegistry>,
    pub thresholds: ThresholdConfig,
    pub on_action: Callback<AdminAction>,
    pub on_navigate: Callback<Tab>,
}

/// Simulated map: markers on a jittered grid, not real coordinates
#[function_component(BinMap)]
pub fn bin_map(props: &BinMapProps) -> Html {
    let selected = use_state(|| None::<String>);

    // Laid out once per collection size so markers stay put between drift ticks
    let positions = use_memo(props.registry.len(), |count| {
        layout(*count, &mut rand::thread_rng())
    });

    let action = |action: AdminAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(action.clone()))
    };

    let selected_bin = selected
        .as_deref()
        .and_then(|id| props.registry.get(id));

    html! {
        <div class="surface map">
            <section class="card">
                <div class="card-header">
                    <h2>{"Interactive Bin Map"}</h2>
                    <div class="button-row">
                        <button class="action subtle" onclick={action(AdminAction::CenterMap)}>{"\u{1f9ed} Center Map"}</button>
                        <button class="action subtle" onclick={action(AdminAction::MapLayers)}>{"\u{2699}\u{fe0f} Layers"}</button>
                    </div>
                </div>
                <div class="map-canvas">
                    <div class="map-road horizontal" style="top: 33%;"></div>
                    <div class="map-road horizontal" style="top: 66%;"></div>
                    <div class="map-road vertical" style="left: 25%;"></div>
                    <div class="map-road vertical" style="left: 75%;"></div>
                    {
                        props.registry.iter().zip(positions.iter()).map(|(bin, pos)| {
                            let is_selected = selected.as_deref() == Some(bin.id.as_str());
                            let onclick = {
                                let selected = selected.clone();
                                let id = bin.id.clone();
                                Callback::from(move |_| selected.set(Some(id.clone())))
                            };
                            marker(bin, *pos, bin.status(&props.thresholds), is_selected, onclick)
                        }).collect::<Html>()
                    }
                    <div class="map-zoom">
                        <button class="icon-button" title="Zoom in" onclick={action(AdminAction::ZoomIn)}>{"+"}</button>
                        <button class="icon-button" title="Zoom out" onclick={action(AdminAction::ZoomOut)}>{"-"}</button>
                    </div>
                    <div class="map-legend">
                        <p class="small">{"Status"}</p>
                        {
                            BinStatus::all().iter().map(|s| html! {
                                <span class="legend-item">
                                    <span class={classes!("dot", s.css_class())}></span>
                                    {s.label()}
                                </span>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            if let Some(bin) = selected_bin {
                { detail_panel(bin, bin.status(&props.thresholds), props) }
            }
        </div>
    }
}

fn marker(
    bin: &Bin,
    pos: MapPosition,
    status: BinStatus,
    selected: bool,
    onclick: Callback<MouseEvent>,
) -> Html {
    let style = format!("left: {:.1}%; top: {:.1}%;", pos.x, pos.y);

    html! {
        <div
            key={bin.id.clone()}
            class={classes!("map-marker", selected.then_some("selected"))}
            {style}
            {onclick}
        >
            <div class={classes!("marker-icon", status.css_class())}>
                {"\u{1f5d1}\u{fe0f}"}
                <span class={classes!("marker-type", bin.waste_type.css_class())}></span>
                <svg class="fill-ring" width="40" height="40">
                    <circle cx="20" cy="20" r="18" fill="none" stroke="currentColor" stroke-width="2" stroke-opacity="0.2" />
                    <circle
                        cx="20" cy="20" r="18"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-dasharray={fill_ring_dasharray(bin.fill_level)}
                        stroke-linecap="round"
                        transform="rotate(-90 20 20)"
                    />
                </svg>
            </div>
            <div class="marker-label">{&bin.name}</div>
        </div>
    }
}

fn detail_panel(bin: &Bin, status: BinStatus, props: &BinMapProps) -> Html {
    let bin_action = |make: fn(String) -> AdminAction| {
        let on_action = props.on_action.clone();
        let id = bin.id.clone();
        Callback::from(move |_| on_action.emit(make(id.clone())))
    };

    let view_analytics = props.on_navigate.reform(|_: MouseEvent| Tab::Analytics);

    html! {
        <section class="card bin-detail">
            <div class="bin-detail-header">
                <h2>{format!("Bin Details - {}", bin.name)}</h2>
                <StatusBadge {status} uppercase=true />
            </div>
            <div class="detail-grid">
                <div><p class="muted small">{"Bin ID"}</p><p>{&bin.id}</p></div>
                <div><p class="muted small">{"Waste Type"}</p><p>{bin.waste_type.label()}</p></div>
                <div><p class="muted small">{"Fill Level"}</p><p>{format!("{:.1}%", bin.fill_level)}</p></div>
                <div><p class="muted small">{"Last Emptied"}</p><p>{bin.last_emptied_label(Utc::now())}</p></div>
            </div>
            <div class="button-row">
                <button class="action" onclick={view_analytics}>{"\u{1f4c8} View Analytics"}</button>
                <button class="action subtle" onclick={bin_action(AdminAction::CreateRoute)}>{"\u{1f9ed} Create Route"}</button>
                if status == BinStatus::Critical {
                    <button class="action danger" onclick={bin_action(AdminAction::Empty)}>{"\u{1f5d1}\u{fe0f} Emergency Empty"}</button>
                }
            </div>
        </section>
    }
}
