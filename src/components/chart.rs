use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title, VisualMap, VisualMapPiece},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::analytics::MonthlyCollection;

const CHART_ID: &str = "collections-chart";

#[derive(Properties, PartialEq)]
pub struct CollectionsChartProps {
    pub history: Rc<Vec<MonthlyCollection>>,
}

/// Bar chart of collections per month
#[function_component(CollectionsChart)]
pub fn collections_chart(props: &CollectionsChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.history.clone(), |history| series_data(history));

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, series_data);

                    let series_data = series_data.clone();
                    web_sys::window().map(|window| {
                        EventListener::new(&window, "resize", move |_| {
                            render_chart(&container, &series_data);
                        })
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

pub fn series_data(history: &[MonthlyCollection]) -> (Vec<String>, Vec<f64>) {
    let x_data = history.iter().map(|m| m.month.to_string()).collect();
    let y_data = history.iter().map(|m| f64::from(m.collections)).collect();
    (x_data, y_data)
}

fn render_chart(container: &HtmlElement, series_data: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (x_data, y_data) = series_data;

    let (title_color, axis_color, grid_color) = ("#1f2937", "#6b7280", "#e5e7eb");

    CharmingChart::new()
        .title(
            Title::new()
                .text("Collections per Month")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .visual_map(VisualMap::new().show(false).pieces(vec![
            VisualMapPiece::new().lt(160.0).color("#f59e0b"),
            VisualMapPiece::new().gte(160.0).lt(200.0).color("#3b82f6"),
            VisualMapPiece::new().gte(200.0).color("#10b981"),
        ]))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data.clone())
                .axis_label(AxisLabel::new().color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("trips")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().data(y_data.clone()).bar_width("60%"))
}
