use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use api::feedback::*;
use common::{config::SiteConfig, feedback::FeedbackStore, notice::Notice};

use crate::{
    common::{
        modal::{FormUuid, MODAL_STACK, close_modal, is_showing_form},
        toast::push_toast,
    },
    components::modal::{ModalFrame, ModalSize},
};

const SENTIMENTS: [(&str, &str, &str); 3] = [
    ("positive", "😊", "Positive"),
    ("neutral", "😐", "Neutral"),
    ("negative", "☹", "Negative"),
];

#[derive(Clone, PartialEq, Props)]
pub struct FeedbackFormBoxProps {
    feedback: Signal<FeedbackStore>,
    config: Signal<SiteConfig>,
    product_name: String,
    form_uuid: FormUuid,
}

// the feedback form
//
// rating and sentiment are only shown back to the user; the store receives
// title, description, email (as author) and category.  the entry is stored as
// soon as the form is submitted, and the acknowledgement follows after the
// configured delay
#[component]
pub fn FeedbackFormBox(props: FeedbackFormBoxProps) -> Element {
    let mut feedback = props.feedback;
    let config = props.config;
    let form_uuid = props.form_uuid;

    let mut rating = use_signal(|| 0u8);
    let mut sentiment = use_signal(|| None::<&'static str>);
    let mut category = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let can_submit = !submitting() && !title().trim().is_empty() && !description().trim().is_empty();

    rsx! {
        ModalFrame {
            title: "Share Your Feedback",
            subtitle: format!("Help us improve {}", props.product_name),
            size: ModalSize::Medium,
            disable_close: submitting(),

            form {
                class: "feedback-form",
                onsubmit: move |event| {
                    event.prevent_default();

                    if submitting() || title().trim().is_empty() || description().trim().is_empty() {
                        return;
                    }
                    submitting.set(true);

                    let draft = FeedbackDraft {
                        title: title(),
                        description: description(),
                        author: Some(email()),
                        category: Some(category()),
                    };
                    let id = feedback.write().submit(draft).id;
                    debug!(id, "feedback stored, waiting to acknowledge");

                    let SiteConfig { feedback_delay_ms, toast_duration_ms, .. } = config();

                    // the form may be closed while we wait, so nothing in here
                    // touches its signals
                    spawn_forever(async move {
                        TimeoutFuture::new(feedback_delay_ms).await;
                        push_toast(
                            Notice::success("Feedback submitted successfully! 🎉"),
                            toast_duration_ms,
                        );
                        if is_showing_form(&MODAL_STACK.read(), form_uuid) {
                            close_modal();
                        }
                    });
                },

                div { class: "form-group",
                    label { class: "form-label", "Overall Rating" }
                    div { class: "star-row",
                        for star in 1..=5u8 {
                            button {
                                key: "{star}",
                                r#type: "button",
                                class: if star <= rating() { "star-button filled" } else { "star-button" },
                                onclick: move |_| rating.set(star),
                                "★"
                            }
                        }
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", "How do you feel?" }
                    div { class: "sentiment-row",
                        for (id , icon , label) in SENTIMENTS {
                            button {
                                key: "{id}",
                                r#type: "button",
                                class: if sentiment() == Some(id) { "sentiment-button selected" } else { "sentiment-button" },
                                onclick: move |_| sentiment.set(Some(id)),
                                span { class: "sentiment-icon", "{icon}" }
                                span { "{label}" }
                            }
                        }
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", "Category" }
                    div { class: "chip-row",
                        for name in FEEDBACK_CATEGORIES {
                            button {
                                key: "{name}",
                                r#type: "button",
                                class: if category() == name { "chip selected" } else { "chip" },
                                onclick: move |_| category.set(name.to_owned()),
                                "{name}"
                            }
                        }
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", "Title" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        required: true,
                        placeholder: "Brief summary of your feedback...",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", "Description" }
                    textarea {
                        class: "form-textarea",
                        rows: "4",
                        required: true,
                        placeholder: "Tell us more about your experience...",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", "Email (Optional)" }
                    input {
                        class: "form-input",
                        r#type: "email",
                        placeholder: "your@email.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: !can_submit,
                    if submitting() {
                        span { class: "spinner" }
                    } else {
                        span { "➤ Submit Feedback" }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FeedbackDetailsBoxProps {
    entry: FeedbackEntry,
}

// read-only view of one entry
//
// the vote and comment buttons are decorative, as they are in the list
#[component]
pub fn FeedbackDetailsBox(props: FeedbackDetailsBoxProps) -> Element {
    let entry = props.entry;
    let status_class = entry.status.css_class();
    let priority_class = entry.priority.css_class();

    let footer = rsx! {
        div { class: "modal-buttons",
            button { class: "btn btn-secondary", r#type: "button", "👍 Upvote" }
            button { class: "btn btn-secondary", r#type: "button", "💬 Add Comment" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| close_modal(),
                "Close"
            }
        }
    };

    rsx! {
        ModalFrame { title: "{entry.title}", size: ModalSize::Medium, footer,

            div { class: "badge-row",
                span { class: "badge {status_class}", "{entry.status}" }
                span { class: "badge {priority_class}", "{entry.priority} priority" }
            }

            div { class: "meta-grid",
                div { class: "meta-item",
                    span { class: "meta-label", "Author" }
                    span { "{entry.author}" }
                }
                div { class: "meta-item",
                    span { class: "meta-label", "Date" }
                    span { "{entry.date}" }
                }
                div { class: "meta-item",
                    span { class: "meta-label", "Category" }
                    span { "{entry.category}" }
                }
            }

            div { class: "details-block",
                h3 { "Feedback Details" }
                p { "{entry.description}" }
            }

            div { class: "engagement-grid",
                div { class: "engagement upvotes",
                    span { class: "engagement-value", "{entry.upvotes}" }
                    span { class: "engagement-label", "Upvotes" }
                }
                div { class: "engagement downvotes",
                    span { class: "engagement-value", "{entry.downvotes}" }
                    span { class: "engagement-label", "Downvotes" }
                }
                div { class: "engagement comments",
                    span { class: "engagement-value", "{entry.comments}" }
                    span { class: "engagement-label", "Comments" }
                }
            }
        }
    }
}
