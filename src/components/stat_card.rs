use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    /// Accent modifier, e.g. "success" or "warning"
    #[prop_or_default]
    pub accent: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Headline figure card used by every surface
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", props.accent.to_string())}>
            <div class="stat-card-header">
                <div>
                    <h3>{props.title.to_string()}</h3>
                    <p class="stat-value">{props.value.to_string()}</p>
                </div>
                <span class="stat-icon">{props.icon.to_string()}</span>
            </div>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    pub value: f64,
}

#[function_component(Progress)]
pub fn progress(props: &ProgressProps) -> Html {
    let width = format!("width: {:.1}%;", props.value.clamp(0.0, 100.0));
    html! {
        <div class="progress">
            <div class="progress-bar" style={width}></div>
        </div>
    }
}
