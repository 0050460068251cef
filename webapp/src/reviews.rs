use dioxus::prelude::*;

use common::feedback::FeedbackStore;

use crate::{common::REVIEWS_ANCHOR, components::feedback_list::FeedbackList, stores::use_stores};

#[component]
pub fn ReviewsPage() -> Element {
    let stores = use_stores();

    rsx! {
        Reviews { feedback: stores.feedback }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ReviewsProps {
    feedback: Signal<FeedbackStore>,
}

#[component]
pub fn Reviews(props: ReviewsProps) -> Element {
    rsx! {
        section { id: REVIEWS_ANCHOR, class: "page-section",
            FeedbackList { feedback: props.feedback }
        }
    }
}
