use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use api::{feedback::FeedbackUuid, product::ProductUuid};
use common::{config::SiteConfig, feedback::FeedbackStore};

mod feedback;
use feedback::{FeedbackDetailsBox, FeedbackFormBox};

mod product;
use product::ProductDetailsBox;

pub static MODAL_STACK: GlobalSignal<Vec<Modal>> = Signal::global(|| Vec::new());

static NEXT_FORM: AtomicU64 = AtomicU64::new(0);

// every opened feedback form gets its own id, even for the same beer
pub type FormUuid = u64;

// Modal
//
// this enumerates all of the modal boxes the site can display, and what the
// relevant data is to show the correct box.  pushing this onto the modal stack
// will trigger the ModalBox, below
#[derive(Clone, Debug, PartialEq)]
pub enum Modal {
    FeedbackForm {
        product_name: String,
        form_uuid: FormUuid,
    },
    ProductDetails(ProductUuid),
    FeedbackDetails(FeedbackUuid),
}

pub fn feedback_form(product_name: impl Into<String>) -> Modal {
    Modal::FeedbackForm {
        product_name: product_name.into(),
        form_uuid: NEXT_FORM.fetch_add(1, Ordering::Relaxed),
    }
}

// whether this particular form is the box on screen
pub fn is_showing_form(stack: &[Modal], form_uuid: FormUuid) -> bool {
    matches!(
        stack.last(),
        Some(Modal::FeedbackForm { form_uuid: top, .. }) if *top == form_uuid
    )
}

pub fn close_modal() {
    MODAL_STACK.with_mut(|v| {
        v.pop();
    });
}

// swap the top box for another one, e.g. product details -> feedback form
pub fn replace_modal(modal: Modal) {
    MODAL_STACK.with_mut(|v| {
        v.pop();
        v.push(modal);
    });
}

// ModalBox
//
// this is included once, in the layout, and displays the modal on the top of
// the stack.  the boxes that read or write feedback get the store handed in
// from here
#[derive(Clone, PartialEq, Props)]
pub struct ModalBoxProps {
    feedback: Signal<FeedbackStore>,
    config: Signal<SiteConfig>,
}

#[component]
pub fn ModalBox(props: ModalBoxProps) -> Element {
    let feedback = props.feedback;
    let config = props.config;

    let top = MODAL_STACK.read().last().cloned();

    match top {
        Some(Modal::FeedbackForm { product_name, form_uuid }) => rsx! {
            FeedbackFormBox { key: "{form_uuid}", feedback, config, product_name, form_uuid }
        },
        Some(Modal::ProductDetails(product_uuid)) => rsx! {
            ProductDetailsBox { product_uuid }
        },
        Some(Modal::FeedbackDetails(feedback_uuid)) => {
            let entry = feedback.read().get(feedback_uuid).cloned();
            match entry {
                Some(entry) => rsx! {
                    FeedbackDetailsBox { entry }
                },
                None => rsx! {
                    ModalErr { err: "that feedback entry no longer exists" }
                },
            }
        }
        None => rsx! {},
    }
}

#[derive(Clone, PartialEq, Props)]
struct ModalErrProps {
    err: String,
}

#[component]
fn ModalErr(props: ModalErrProps) -> Element {
    rsx! {
        crate::components::modal::ModalFrame { title: "Something went wrong",
            p { class: "modal-error", "{props.err}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_for_the_same_beer_are_distinct() {
        let first = feedback_form("Simba Stout");
        let second = feedback_form("Simba Stout");

        assert_ne!(first, second);
    }

    #[test]
    fn only_the_submitted_form_counts_as_showing() {
        let submitted = feedback_form("Golden Lager");
        let Modal::FeedbackForm { form_uuid, .. } = submitted.clone() else {
            panic!("not a feedback form");
        };

        assert!(is_showing_form(&[submitted], form_uuid));

        // closed, then another form opened before the acknowledgement
        let reopened = feedback_form("Simba Stout");
        assert!(!is_showing_form(&[reopened.clone()], form_uuid));
        assert!(!is_showing_form(&[], form_uuid));

        // a details box stacked over it also hides it
        assert!(!is_showing_form(&[reopened, Modal::ProductDetails(1)], form_uuid));
    }
}
