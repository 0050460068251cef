use dioxus::prelude::*;

use crate::common::modal::close_modal;

#[derive(Clone, PartialEq, Props)]
pub struct ModalFrameProps {
    title: String,
    #[props(default)]
    subtitle: Option<String>,
    #[props(default)]
    size: ModalSize,
    #[props(default)]
    disable_close: bool,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
}

#[derive(Clone, Default, PartialEq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[component]
pub fn ModalFrame(props: ModalFrameProps) -> Element {
    let width = match props.size {
        ModalSize::Small => "max-width: 420px;",
        ModalSize::Medium => "max-width: 640px;",
        ModalSize::Large => "max-width: 860px;",
    };

    rsx! {
        div {
            class: "modal-overlay",
            // clicking the backdrop closes the box unless disabled
            onclick: move |evt| {
                evt.stop_propagation();
                if !props.disable_close {
                    close_modal();
                }
            },
            div {
                class: "modal-content",
                style: "{width}",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    div {
                        h2 { class: "modal-title", "{props.title}" }
                        if let Some(subtitle) = &props.subtitle {
                            p { class: "modal-subtitle", "{subtitle}" }
                        }
                    }
                    if !props.disable_close {
                        button {
                            class: "btn-close",
                            r#type: "button",
                            onclick: move |_| close_modal(),
                            "×"
                        }
                    }
                }

                div { class: "modal-body", {props.children} }

                if let Some(footer) = &props.footer {
                    div { class: "modal-footer", {footer.clone()} }
                }
            }
        }
    }
}
