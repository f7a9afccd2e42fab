use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::thresholds::Threshold;

#[derive(Properties, PartialEq)]
pub struct ThresholdSliderProps {
    pub threshold: Threshold,
    pub value: u8,
    pub on_change: Callback<(Threshold, u8)>,
}

/// Range input bound to one threshold's slider range and step
#[function_component(ThresholdSlider)]
pub fn threshold_slider(props: &ThresholdSliderProps) -> Html {
    let range = props.threshold.range();

    let on_change = {
        let callback = props.on_change.clone();
        let threshold = props.threshold;
        let current = props.value;
        Callback::from(move |e: Event| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let value = input.value().parse::<u8>().ok();

            // Snap back to the stored value. An accepted change re-renders with the
            // new one; a rejected change leaves the vdom value as it was.
            input.set_value(&current.to_string());

            if let Some(value) = value {
                callback.emit((threshold, value));
            }
        })
    };

    html! {
        <div class="threshold-slider">
            <label>{props.threshold.label()}</label>
            <input
                type="range"
                min={range.min.to_string()}
                max={range.max.to_string()}
                step={range.step.to_string()}
                value={props.value.to_string()}
                onchange={on_change}
            />
            <p class="muted small">{format!("{}%", props.value)}</p>
        </div>
    }
}
