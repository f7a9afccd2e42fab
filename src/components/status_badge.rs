use crate::models::bin::BinStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: BinStatus,
    #[prop_or(false)]
    pub uppercase: bool,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let label = if props.uppercase {
        props.status.label().to_uppercase()
    } else {
        props.status.label().to_string()
    };

    html! {
        <span class={classes!("badge", props.status.css_class())}>{label}</span>
    }
}
