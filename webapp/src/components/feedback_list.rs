use dioxus::prelude::*;

use api::feedback::{FeedbackEntry, FeedbackStatus};
use common::feedback::{FeedbackFilter, FeedbackSort, FeedbackStore};

use crate::common::modal::{MODAL_STACK, Modal};

// the status filter offers the three states seed and user entries can be in
const FILTER_STATUSES: [FeedbackStatus; 3] = [
    FeedbackStatus::Planned,
    FeedbackStatus::InProgress,
    FeedbackStatus::Completed,
];

#[derive(Clone, PartialEq, Props)]
pub struct FeedbackListProps {
    feedback: Signal<FeedbackStore>,
}

#[component]
pub fn FeedbackList(props: FeedbackListProps) -> Element {
    let feedback = props.feedback;

    let mut sort = use_signal(FeedbackSort::default);
    let mut filter = use_signal(FeedbackFilter::default);

    let entries: Vec<FeedbackEntry> = feedback
        .read()
        .view(filter(), sort())
        .into_iter()
        .cloned()
        .collect();

    let sort_value = sort().as_value();
    let filter_value = filter().as_value();

    rsx! {
        div { class: "container",
            div { class: "section-header",
                h2 { class: "section-title", "Beer Reviews & Feedback" }
                div { class: "list-controls",
                    select {
                        class: "form-select",
                        value: sort_value,
                        onchange: move |evt| sort.set(FeedbackSort::from(evt.value())),
                        for choice in FeedbackSort::all() {
                            option { key: "{choice:?}", value: choice.as_value(), {choice.label()} }
                        }
                    }
                    select {
                        class: "form-select",
                        value: "{filter_value}",
                        onchange: move |evt| filter.set(FeedbackFilter::from(evt.value())),
                        option { value: "all", "All Status" }
                        for status in FILTER_STATUSES {
                            option { key: "{status}", value: "{status}", "{status}" }
                        }
                    }
                }
            }

            div { class: "feedback-items",
                if entries.is_empty() {
                    p { class: "empty-note", "No feedback matches this filter yet." }
                }
                for entry in entries {
                    FeedbackCard { key: "{entry.id}", entry }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FeedbackCardProps {
    entry: FeedbackEntry,
}

// the vote and comment buttons show the counts but change nothing
#[component]
fn FeedbackCard(props: FeedbackCardProps) -> Element {
    let entry = props.entry;
    let feedback_uuid = entry.id;
    let status_class = entry.status.css_class();
    let priority_class = entry.priority.css_class();

    rsx! {
        div { class: "feedback-card {priority_class}",
            div { class: "feedback-card-header",
                div {
                    h3 { class: "feedback-title", "{entry.title}" }
                    p { class: "feedback-description", "{entry.description}" }
                }
                span { class: "badge {status_class}", "{entry.status}" }
            }

            div { class: "feedback-meta",
                span { "👤 {entry.author}" }
                span { "📅 {entry.date}" }
                span { "🏷 {entry.category}" }
            }

            div { class: "feedback-actions",
                div { class: "vote-buttons",
                    button { class: "vote-button up", "▲ {entry.upvotes}" }
                    button { class: "vote-button down", "▼ {entry.downvotes}" }
                    button { class: "vote-button comments", "💬 {entry.comments}" }
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| {
                        MODAL_STACK.with_mut(|v| v.push(Modal::FeedbackDetails(feedback_uuid)));
                    },
                    "View Details"
                }
            }
        }
    }
}
