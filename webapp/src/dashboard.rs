use dioxus::prelude::*;

use api::product::{PRODUCT_CATEGORIES, Product, catalog, filter_products};

use crate::{
    common::{
        BEERS_ANCHOR, DASHBOARD_ANCHOR,
        modal::{MODAL_STACK, feedback_form},
    },
    components::product_card::ProductCard,
};

const ALL_CATEGORIES: &str = "all";

// the floating button is not tied to any beer in particular
const GENERAL_EXPERIENCE: &str = "Beer Tasting Experience";

#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        Dashboard {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    let products = use_hook(catalog);

    let mut search = use_signal(String::new);
    let mut category = use_signal(|| String::from(ALL_CATEGORIES));
    let mut list_view = use_signal(|| false);

    let shown: Vec<Product> = filter_products(&products, &search(), &category())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section { id: DASHBOARD_ANCHOR, class: "dashboard",
            div { id: BEERS_ANCHOR, class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "Our Beer Collection" }
                    p { class: "page-subtitle",
                        "Discover our handcrafted beers and tell us what you think of every pour."
                    }
                }

                div { class: "toolbar",
                    div { class: "search-box",
                        span { class: "search-icon", "🔍" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            placeholder: "Search beers...",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                    select {
                        class: "form-select",
                        value: "{category}",
                        onchange: move |evt| category.set(evt.value()),
                        option { value: ALL_CATEGORIES, "All Categories" }
                        for name in PRODUCT_CATEGORIES {
                            option { key: "{name}", value: name, "{name}" }
                        }
                    }
                    div { class: "view-toggle",
                        button {
                            class: if list_view() { "icon-button" } else { "icon-button active" },
                            title: "Grid view",
                            onclick: move |_| list_view.set(false),
                            "▦"
                        }
                        button {
                            class: if list_view() { "icon-button active" } else { "icon-button" },
                            title: "List view",
                            onclick: move |_| list_view.set(true),
                            "☰"
                        }
                    }
                    // decorative
                    button { class: "btn btn-primary", "+ Add Beer" }
                }

                if shown.is_empty() {
                    div { class: "empty-state",
                        div { class: "empty-icon", "🍺" }
                        h3 { "No beers found" }
                        p { "Try a different search or style." }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                search.set(String::new());
                                category.set(String::from(ALL_CATEGORIES));
                            },
                            "Clear Filters"
                        }
                    }
                } else {
                    div { class: if list_view() { "product-list" } else { "product-grid" },
                        for product in shown {
                            ProductCard { key: "{product.id}", product, list_view: list_view() }
                        }
                    }
                }
            }

            button {
                class: "floating-button",
                title: "Give feedback",
                onclick: move |_| {
                    MODAL_STACK.with_mut(|v| v.push(feedback_form(GENERAL_EXPERIENCE)));
                },
                "💬"
            }
        }
    }
}
