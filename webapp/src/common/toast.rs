use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::notice::{Notice, NoticeKind};

pub static TOAST_STACK: GlobalSignal<Vec<Toast>> = Signal::global(|| Vec::new());

static NEXT_TOAST: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    notice: Notice,
}

// show a notice for `duration_ms`
//
// the expiry timer is not tied to the caller's scope, since callers (modals,
// forms) are often unmounted right after raising a toast
pub fn push_toast(notice: Notice, duration_ms: u32) {
    let id = NEXT_TOAST.fetch_add(1, Ordering::Relaxed);

    TOAST_STACK.with_mut(|v| v.push(Toast { id, notice }));

    spawn_forever(async move {
        TimeoutFuture::new(duration_ms).await;
        TOAST_STACK.with_mut(|v| v.retain(|toast| toast.id != id));
    });
}

#[component]
pub fn ToastHost() -> Element {
    rsx! {
        div { class: "toast-host",
            for toast in TOAST_STACK.read().iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    },
                    onclick: {
                        let id = toast.id;
                        move |_| TOAST_STACK.with_mut(|v| v.retain(|toast| toast.id != id))
                    },
                    span { class: "toast-icon",
                        match toast.notice.kind {
                            NoticeKind::Success => "✓",
                            NoticeKind::Error => "!",
                        }
                    }
                    span { "{toast.notice.text}" }
                }
            }
        }
    }
}
