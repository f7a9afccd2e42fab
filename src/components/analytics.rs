use std::rc::Rc;
use yew::prelude::*;

use super::chart::CollectionsChart;
use super::stat_card::{Progress, StatCard};
use crate::models::analytics::{
    AnalyticsSummary, bin_performance, collection_history, waste_distribution,
};
use crate::services::registry::BinRegistry;

#[derive(Properties, PartialEq)]
pub struct AnalyticsProps {
    /// Used to resolve bin names for the performance table
    pub registry: Rc<BinRegistry>,
}

#[function_component(Analytics)]
pub fn analytics(props: &AnalyticsProps) -> Html {
    let waste = use_memo((), |_| waste_distribution());
    let history = use_memo((), |_| collection_history());
    let performance = use_memo((), |_| bin_performance());
    let summary = use_memo((), {
        let waste = waste.clone();
        let history = history.clone();
        move |_| AnalyticsSummary::compute(&waste, &history)
    });

    html! {
        <div class="surface analytics">
            <div class="card-grid four">
                <StatCard title="Total Waste Collected" value={format!("{} kg", summary.total_waste_kg)} icon="\u{1f4ca}" accent="primary">
                    <p class="success-text small">{"+12% from last month"}</p>
                </StatCard>
                <StatCard title="Collection Efficiency" value={format!("{:.1}%", summary.average_efficiency)} icon="\u{1f4c8}" accent="success">
                    <Progress value={summary.average_efficiency} />
                </StatCard>
                <StatCard title="Total Collections" value={summary.total_collections.to_string()} icon="\u{1f69a}" accent="warning">
                    <p class="muted small">{"trips this period"}</p>
                </StatCard>
                <StatCard title="Cost Savings" value={format!("${}", summary.cost_savings)} icon="\u{1f4b2}" accent="success">
                    <p class="success-text small">{"Route optimization"}</p>
                </StatCard>
            </div>

            <div class="card-grid two">
                <section class="card">
                    <h2>{"Waste Type Distribution"}</h2>
                    {
                        waste.iter().map(|w| {
                            let trend_class = if w.trend > 0 { "trend-up" } else { "trend-down" };
                            let arrow = if w.trend > 0 { "\u{25b2}" } else { "\u{25bc}" };
                            html! {
                                <div key={w.waste_type.label()} class="distribution-row">
                                    <div class="distribution-header">
                                        <span>
                                            <span class={classes!("swatch", w.waste_type.css_class())}></span>
                                            {w.waste_type.label()}
                                        </span>
                                        <span>
                                            <span class="muted small">{format!("{}kg ", w.amount_kg)}</span>
                                            <span class={classes!("badge", trend_class)}>
                                                {format!("{arrow} {}%", w.trend.unsigned_abs())}
                                            </span>
                                        </span>
                                    </div>
                                    <Progress value={f64::from(w.percentage)} />
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </section>

                <section class="card">
                    <h2>{"Monthly Collection Trends"}</h2>
                    {
                        history.iter().map(|m| html! {
                            <div key={m.month} class="trend-row">
                                <span class="trend-month">{m.month}</span>
                                <div class="trend-bar">
                                    <div class="distribution-header">
                                        <span class="small">{format!("Collections: {}", m.collections)}</span>
                                        <span class="muted small">{format!("{}% efficiency", m.efficiency)}</span>
                                    </div>
                                    <Progress value={m.bar_percent()} />
                                </div>
                                <span class="muted small">{format!("${}", m.cost)}</span>
                            </div>
                        }).collect::<Html>()
                    }
                    <CollectionsChart history={history.clone()} />
                </section>
            </div>

            <section class="card">
                <h2>{"Bin Performance Analysis"}</h2>
                <table class="performance-table">
                    <thead>
                        <tr>
                            <th>{"Bin ID"}</th>
                            <th>{"Location"}</th>
                            <th>{"Collections"}</th>
                            <th>{"Uptime"}</th>
                            <th>{"Issues"}</th>
                            <th>{"Performance"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            performance.iter().map(|p| {
                                let name = props
                                    .registry
                                    .get(p.bin_id)
                                    .map_or("Unknown", |b| b.name.as_str());
                                html! {
                                    <tr key={p.bin_id}>
                                        <td class="mono">{p.bin_id}</td>
                                        <td>{name}</td>
                                        <td>{p.collections}</td>
                                        <td>
                                            <span class={classes!("dot", p.uptime_rating().css_class())}></span>
                                            {format!("{}%", p.uptime)}
                                        </td>
                                        <td>
                                            <span class={classes!("badge", p.issue_level().css_class())}>
                                                {format!("{} issues", p.issues)}
                                            </span>
                                        </td>
                                        <td><Progress value={p.uptime} /></td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </section>

            <div class="card-grid three">
                <StatCard title="CO\u{2082} emissions saved" value="2.4 tons" icon="\u{1f343}" accent="success">
                    <p class="success-text small">{"+15% vs last month"}</p>
                </StatCard>
                <StatCard title="Recycling rate" value="78%" icon="\u{267b}\u{fe0f}" accent="primary">
                    <p class="muted small">{"Target: 80%"}</p>
                </StatCard>
                <StatCard title="Route distance saved" value="156 km" icon="\u{1f69a}" accent="warning">
                    <p class="muted small">{"AI optimization"}</p>
                </StatCard>
            </div>
        </div>
    }
}
