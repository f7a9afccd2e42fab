use yew::prelude::*;

use crate::hooks::use_tab::Tab;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tab-bar" role="tablist">
            {
                Tab::all().iter().map(|&tab| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_| on_select.emit(tab))
                    };
                    let selected = tab == props.active;
                    html! {
                        <button
                            class={classes!("tab", selected.then_some("active"))}
                            role="tab"
                            aria-selected={selected.to_string()}
                            {onclick}
                        >
                            <span class="tab-icon">{tab.icon()}</span>
                            <span class="tab-label">{tab.label()}</span>
                        </button>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
