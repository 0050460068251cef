use dioxus::prelude::*;

use api::contact::ContactReq;
use common::{
    config::SiteConfig,
    contact::{FormRelay, submit_contact},
};

use crate::{
    common::{CONTACT_ANCHOR, toast::push_toast},
    stores::use_stores,
};

const CONTACT_DETAILS: [(&str, &str, &str); 3] = [
    ("✉", "Email", "vanshikalatiyan40@gmail.com"),
    ("☎", "Phone", "+91 98765 43210"),
    ("⌖", "Location", "Mumbai, Maharashtra, India"),
];

// (name, url, caption)
const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("Gmail", "mailto:vanshikalatiyan40@gmail.com", "vanshikalatiyan40@gmail.com"),
    (
        "LinkedIn",
        "https://www.linkedin.com/in/vanshika-latiyan-20103528b",
        "Connect on LinkedIn",
    ),
    ("GitHub", "https://github.com/VanshikaChaudhary12", "View GitHub Profile"),
];

#[component]
pub fn ContactPage() -> Element {
    let stores = use_stores();

    rsx! {
        Contact { config: stores.config }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactProps {
    config: Signal<SiteConfig>,
}

#[component]
pub fn Contact(props: ContactProps) -> Element {
    let config = props.config;

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);

    rsx! {
        section { id: CONTACT_ANCHOR, class: "page-section",
            div { class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "Get In Touch" }
                    p { class: "page-subtitle",
                        "Have questions about our beers or want to collaborate? We'd love to hear from you!"
                    }
                }

                div { class: "contact-grid",
                    div { class: "card contact-form-card",
                        h2 { "Send us a Message" }

                        form {
                            class: "contact-form",
                            onsubmit: move |event| {
                                event.prevent_default();

                                let req = ContactReq {
                                    name: name(),
                                    email: email(),
                                    subject: subject(),
                                    message: message(),
                                };
                                if sending() || !req.is_complete() {
                                    return;
                                }
                                sending.set(true);

                                let SiteConfig { contact_relay_url, toast_duration_ms, .. } = config();

                                // scoped to the section, so the fields are still
                                // here when the relay answers
                                spawn(async move {
                                    let relay = FormRelay::new(contact_relay_url);
                                    let notice = submit_contact(&relay, &req).await;

                                    if !notice.is_error() {
                                        name.set(String::new());
                                        email.set(String::new());
                                        subject.set(String::new());
                                        message.set(String::new());
                                    }
                                    push_toast(notice, toast_duration_ms);
                                    sending.set(false);
                                });
                            },

                            div { class: "form-row",
                                input {
                                    class: "form-input",
                                    r#type: "text",
                                    name: "name",
                                    placeholder: "Your Name",
                                    required: true,
                                    value: "{name}",
                                    oninput: move |evt| name.set(evt.value()),
                                }
                                input {
                                    class: "form-input",
                                    r#type: "email",
                                    name: "email",
                                    placeholder: "Your Email",
                                    required: true,
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                }
                            }
                            input {
                                class: "form-input",
                                r#type: "text",
                                name: "subject",
                                placeholder: "Subject",
                                required: true,
                                value: "{subject}",
                                oninput: move |evt| subject.set(evt.value()),
                            }
                            textarea {
                                class: "form-textarea",
                                name: "message",
                                placeholder: "Your Message",
                                rows: "6",
                                required: true,
                                value: "{message}",
                                oninput: move |evt| message.set(evt.value()),
                            }
                            button {
                                class: "btn btn-primary btn-block",
                                r#type: "submit",
                                disabled: sending(),
                                if sending() {
                                    span { class: "spinner" }
                                } else {
                                    "Send Message"
                                }
                            }
                        }
                    }

                    div { class: "contact-side",
                        div { class: "card",
                            h3 { "Contact Information" }
                            for (icon , label , value) in CONTACT_DETAILS {
                                div { key: "{label}", class: "contact-detail",
                                    span { class: "contact-icon", "{icon}" }
                                    div {
                                        p { class: "contact-label", "{label}" }
                                        p { class: "contact-value", "{value}" }
                                    }
                                }
                            }
                        }

                        div { class: "card",
                            h3 { "Connect With Us" }
                            for (site , url , caption) in SOCIAL_LINKS {
                                a {
                                    key: "{site}",
                                    class: "social-link",
                                    href: url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    p { class: "social-name", "{site}" }
                                    p { class: "social-caption", "{caption}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
