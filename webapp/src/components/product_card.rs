use dioxus::prelude::*;

use api::product::Product;

use crate::common::modal::{MODAL_STACK, Modal, feedback_form};

#[derive(Clone, PartialEq, Props)]
pub struct ProductCardProps {
    product: Product,
    #[props(default)]
    list_view: bool,
}

#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let product = props.product;
    let product_uuid = product.id;
    let product_name = product.name.clone();
    let full_stars = product.full_stars();
    let status_class = product.status.css_class();

    // the heart is local to the card and forgotten on re-render of the page
    let mut liked = use_signal(|| false);

    rsx! {
        div { class: if props.list_view { "product-card list" } else { "product-card" },
            div { class: "product-card-image",
                img {
                    src: "{product.image}",
                    alt: "{product.name}",
                    loading: "lazy",
                }
                span { class: "badge {status_class}", "{product.status}" }
                button {
                    class: if liked() { "like-button liked" } else { "like-button" },
                    onclick: move |evt| {
                        evt.stop_propagation();
                        liked.toggle();
                    },
                    if liked() {
                        "♥"
                    } else {
                        "♡"
                    }
                }
                div { class: "product-card-overlay",
                    button {
                        class: "btn btn-light btn-sm",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            MODAL_STACK.with_mut(|v| v.push(Modal::ProductDetails(product_uuid)));
                        },
                        "👁 View Details"
                    }
                }
            }

            div { class: "product-card-info",
                h3 { class: "product-name", "{product.name}" }
                p { class: "product-description", "{product.description}" }

                div { class: "rating-row",
                    span { class: "stars",
                        for i in 0..5usize {
                            span {
                                key: "{i}",
                                class: if i < full_stars { "star filled" } else { "star" },
                                "★"
                            }
                        }
                    }
                    span { class: "rating-value", "{product.rating}" }
                    span { class: "rating-count", "({product.review_count} reviews)" }
                }

                div { class: "product-stats",
                    span { class: "product-stat", "💬 {product.feedback_count}" }
                    span { class: "product-stat growth", "📈 +{product.growth}%" }
                }

                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| {
                        MODAL_STACK.with_mut(|v| v.push(feedback_form(product_name.clone())));
                    },
                    "Give Feedback"
                }
            }
        }
    }
}
