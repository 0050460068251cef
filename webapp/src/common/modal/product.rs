use dioxus::prelude::*;

use api::product::*;

use crate::{
    common::modal::{feedback_form, replace_modal},
    components::modal::{ModalFrame, ModalSize},
};

#[derive(Clone, PartialEq, Props)]
pub struct ProductDetailsBoxProps {
    product_uuid: ProductUuid,
}

#[component]
pub fn ProductDetailsBox(props: ProductDetailsBoxProps) -> Element {
    let Some(product) = catalog().into_iter().find(|p| p.id == props.product_uuid) else {
        return rsx! {
            ModalFrame { title: "Beer not found",
                p { class: "modal-error", "This beer is no longer in the catalog." }
            }
        };
    };

    let profile = tasting_profile(&product.category);
    let status_class = product.status.css_class();
    let product_name = product.name.clone();

    let footer = rsx! {
        div { class: "modal-buttons",
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    replace_modal(feedback_form(product_name.clone()))
                },
                "Share Your Experience"
            }
            // decorative
            button { class: "btn btn-secondary", r#type: "button", "Find in Stores" }
        }
    };

    rsx! {
        ModalFrame { title: "{product.name}", size: ModalSize::Large, footer,

            div { class: "product-hero",
                img { src: "{product.image}", alt: "{product.name}" }
                span { class: "badge {status_class}", "{product.status}" }
            }

            p { class: "product-description", "{product.description}" }

            div { class: "stats-grid compact",
                div { class: "stat-tile",
                    span { class: "stat-value", "{product.rating}" }
                    span { class: "stat-label", "Rating" }
                }
                div { class: "stat-tile",
                    span { class: "stat-value", "{product.review_count}" }
                    span { class: "stat-label", "Reviews" }
                }
                div { class: "stat-tile",
                    span { class: "stat-value", "{product.feedback_count}" }
                    span { class: "stat-label", "Feedback" }
                }
                div { class: "stat-tile",
                    span { class: "stat-value", "+{product.growth}%" }
                    span { class: "stat-label", "Growth" }
                }
            }

            div { class: "details-block",
                h3 { "Beer Details" }
                div { class: "tasting-grid",
                    div {
                        h4 { "Tasting Notes" }
                        p { "{profile.notes}" }
                    }
                    div {
                        h4 { "Specifications" }
                        dl { class: "spec-list",
                            dt { "Style" }
                            dd { "{product.category}" }
                            dt { "ABV" }
                            dd { "{profile.abv}" }
                            dt { "IBU" }
                            dd { "{profile.ibu}" }
                        }
                    }
                }
            }
        }
    }
}
