use async_trait::async_trait;
use tracing::{info, warn};

use api::contact::{ContactReq, send_contact};

use crate::notice::Notice;

pub const CONTACT_SENT: &str = "Message sent successfully! We'll get back to you soon.";
pub const CONTACT_FAILED: &str = "Failed to send message. Please try again.";

// anything that can deliver the contact form
//
// the browser futures are not Send, hence ?Send
#[async_trait(?Send)]
pub trait ContactRelay {
    async fn deliver(&self, req: &ContactReq) -> anyhow::Result<()>;
}

// the third-party form relay, reached over http
#[derive(Clone, Debug, PartialEq)]
pub struct FormRelay {
    url: String,
}

impl FormRelay {
    pub fn new(url: impl Into<String>) -> Self {
        FormRelay { url: url.into() }
    }
}

#[async_trait(?Send)]
impl ContactRelay for FormRelay {
    async fn deliver(&self, req: &ContactReq) -> anyhow::Result<()> {
        send_contact(&self.url, req).await
    }
}

// one attempt, no retry
//
// the outcome only picks the notice; nothing is recorded either way
pub async fn submit_contact<R: ContactRelay + ?Sized>(relay: &R, req: &ContactReq) -> Notice {
    match relay.deliver(req).await {
        Ok(()) => {
            info!("contact message delivered");
            Notice::success(CONTACT_SENT)
        }
        Err(err) => {
            warn!("contact message failed: {err}");
            Notice::error(CONTACT_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    #[derive(Default)]
    struct RecordingRelay {
        reachable: bool,
        attempts: RefCell<u32>,
        delivered: RefCell<Vec<ContactReq>>,
    }

    #[async_trait(?Send)]
    impl ContactRelay for RecordingRelay {
        async fn deliver(&self, req: &ContactReq) -> anyhow::Result<()> {
            *self.attempts.borrow_mut() += 1;
            if !self.reachable {
                return Err(anyhow::Error::msg("connection refused"));
            }
            self.delivered.borrow_mut().push(req.clone());
            Ok(())
        }
    }

    fn request() -> ContactReq {
        ContactReq {
            name: String::from("Meera"),
            email: String::from("meera@example.com"),
            subject: String::from("Collaboration"),
            message: String::from("Let's brew something together."),
        }
    }

    #[test]
    fn unreachable_relay_gives_an_error_notice_and_no_record() {
        let relay = RecordingRelay::default();

        let notice = block_on(submit_contact(&relay, &request()));

        assert!(notice.is_error());
        assert_eq!(notice.text, CONTACT_FAILED);
        assert_eq!(*relay.attempts.borrow(), 1);
        assert!(relay.delivered.borrow().is_empty());
    }

    #[test]
    fn delivered_message_gives_a_success_notice() {
        let relay = RecordingRelay {
            reachable: true,
            ..Default::default()
        };

        let notice = block_on(submit_contact(&relay, &request()));

        assert_eq!(notice, Notice::success(CONTACT_SENT));
        assert_eq!(relay.delivered.borrow().as_slice(), &[request()]);
    }

    #[test]
    fn works_through_a_trait_object() {
        let relay: Box<dyn ContactRelay> = Box::new(RecordingRelay::default());

        let notice = block_on(submit_contact(relay.as_ref(), &request()));

        assert!(notice.is_error());
    }
}
