use dioxus::prelude::*;

use api::roadmap::{RoadmapItem, RoadmapStatus, quarter_items, roadmap};

use crate::common::PLANS_ANCHOR;

// in-progress items all show the same fill; there is no per-item progress
const IN_PROGRESS_FILL: u32 = 65;

#[component]
pub fn BrewingPlansPage() -> Element {
    rsx! {
        BrewingPlans {}
    }
}

#[component]
pub fn BrewingPlans() -> Element {
    let quarters = use_hook(roadmap);

    let first = quarters.first().map(|q| q.label.clone()).unwrap_or_default();
    let mut selected = use_signal(|| first);

    let labels: Vec<String> = quarters.iter().map(|q| q.label.clone()).collect();
    let items: Vec<RoadmapItem> = quarter_items(&quarters, &selected()).to_vec();

    rsx! {
        section { id: PLANS_ANCHOR, class: "page-section",
            div { class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "Brewing Roadmap" }
                    p { class: "page-subtitle",
                        "See what new beers we're brewing next. Your feedback shapes our recipes."
                    }
                }

                div { class: "quarter-selector",
                    for label in labels {
                        button {
                            key: "{label}",
                            class: if label == selected() { "quarter-button active" } else { "quarter-button" },
                            onclick: {
                                let label = label.clone();
                                move |_| selected.set(label.clone())
                            },
                            "{label}"
                        }
                    }
                }

                div { class: "roadmap-items",
                    for item in items {
                        RoadmapCard { key: "{item.id}", item }
                    }
                }

                div { class: "roadmap-legend",
                    for status in RoadmapStatus::all() {
                        LegendEntry { key: "{status}", status }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct RoadmapCardProps {
    item: RoadmapItem,
}

#[component]
fn RoadmapCard(props: RoadmapCardProps) -> Element {
    let item = props.item;
    let status_class = item.status.css_class();
    let status_icon = item.status.icon();
    let priority_class = item.priority.css_class();

    rsx! {
        div { class: "roadmap-card {status_class}",
            div { class: "roadmap-card-header",
                span { class: "roadmap-status",
                    span { class: "roadmap-icon", "{status_icon}" }
                    "{item.status}"
                }
                span { class: "priority-dot {priority_class}", title: "{item.priority} priority" }
            }

            h3 { class: "roadmap-title", "{item.title}" }
            p { class: "roadmap-description", "{item.description}" }

            div { class: "roadmap-meta",
                span { "📅 {item.estimated_completion}" }
                span { "👥 {item.team}" }
            }

            if item.status == RoadmapStatus::InProgress {
                div { class: "progress",
                    div { class: "progress-label",
                        span { "Progress" }
                        span { "{IN_PROGRESS_FILL}%" }
                    }
                    div { class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {IN_PROGRESS_FILL}%;",
                        }
                    }
                }
            }

            div { class: "roadmap-footer",
                span { class: "roadmap-votes", "▲ {item.votes} votes" }
                // decorative
                button { class: "btn btn-secondary btn-sm", "Vote" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct LegendEntryProps {
    status: RoadmapStatus,
}

#[component]
fn LegendEntry(props: LegendEntryProps) -> Element {
    let status_class = props.status.css_class();
    let status_icon = props.status.icon();

    rsx! {
        span { class: "legend-entry {status_class}",
            span { class: "roadmap-icon", "{status_icon}" }
            "{props.status}"
        }
    }
}
