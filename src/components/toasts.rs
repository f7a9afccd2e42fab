use yew::prelude::*;

use crate::hooks::use_toasts::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack" aria-live="polite">
            {
                props.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let onclick = {
                        let on_dismiss = props.on_dismiss.clone();
                        Callback::from(move |_| on_dismiss.emit(id))
                    };
                    html! {
                        <div key={id} class={classes!("toast", toast.ack.severity.css_class())}>
                            <div class="toast-body">
                                <strong>{&toast.ack.title}</strong>
                                <p>{&toast.ack.description}</p>
                            </div>
                            <button class="toast-close" aria-label="Dismiss" {onclick}>{"\u{2715}"}</button>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
