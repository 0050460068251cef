use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, closure::Closure};

use api::theme::THEMES;

use crate::{
    Route,
    common::{
        BEERS_ANCHOR, CONTACT_ANCHOR, DASHBOARD_ANCHOR, PLANS_ANCHOR, REVIEWS_ANCHOR,
        document::{scroll_to_section, scroll_y},
        modal::ModalBox,
        toast::ToastHost,
    },
    stores::{Preferences, use_stores},
};

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Dashboard", DASHBOARD_ANCHOR),
    ("Our Beers", BEERS_ANCHOR),
    ("Reviews", REVIEWS_ANCHOR),
    ("Brewing Plans", PLANS_ANCHOR),
    ("Contact", CONTACT_ANCHOR),
];

fn route_for(anchor: &str) -> Route {
    match anchor {
        DASHBOARD_ANCHOR | BEERS_ANCHOR => Route::DashboardPage {},
        REVIEWS_ANCHOR => Route::ReviewsPage {},
        PLANS_ANCHOR => Route::BrewingPlansPage {},
        CONTACT_ANCHOR => Route::ContactPage {},
        _ => Route::Home {},
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: &'static str,
    anchor: &'static str,
    #[props(default)]
    onselect: Option<EventHandler<()>>,
}

// scrolls to the section when it is on the current page, otherwise jumps to the
// page that holds it
#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let anchor = props.anchor;
    let target = route_for(anchor);
    let onselect = props.onselect;

    let current_path: Route = use_route();
    let navigator = navigator();

    rsx! {
        a {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            href: "#{anchor}",
            onclick: move |evt| {
                evt.prevent_default();
                if !scroll_to_section(anchor) {
                    debug!("section {anchor} not on this page, navigating");
                    navigator.push(target.clone());
                }
                if let Some(onselect) = onselect {
                    onselect.call(());
                }
            },
            "{name}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ThemeMenuProps {
    preferences: Signal<Preferences>,
}

#[component]
fn ThemeMenu(props: ThemeMenuProps) -> Element {
    let mut preferences = props.preferences;
    let mut open = use_signal(|| false);

    let current = preferences.read().current_theme();

    rsx! {
        div { class: "theme-menu",
            button {
                class: "icon-button",
                title: "Choose theme",
                onclick: move |_| open.toggle(),
                "🎨"
            }
            if open() {
                div { class: "theme-dropdown",
                    for (key , theme) in THEMES {
                        button {
                            key: "{key}",
                            class: if key == current { "theme-option active" } else { "theme-option" },
                            onclick: move |_| {
                                preferences.write().select_theme(key);
                                open.set(false);
                            },
                            span {
                                class: "theme-swatch",
                                style: "background-color: {theme.primary};",
                            }
                            span { "{theme.name}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarInnerProps {
    preferences: Signal<Preferences>,
}

#[component]
fn NavBarInner(props: NavBarInnerProps) -> Element {
    let mut preferences = props.preferences;
    let mut scrolled = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);

    // the navbar lives as long as the page, so the listener is never removed
    use_hook(move || {
        let listener = Closure::<dyn FnMut()>::new(move || scrolled.set(scroll_y() > 20.0));
        if let Some(window) = web_sys::window() {
            if let Err(err) = window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                warn!("failed to listen for scroll: {err:?}");
            }
        }
        listener.forget();
    });

    let is_dark = preferences.read().is_dark();

    rsx! {
        header { class: if scrolled() { "app-header scrolled" } else { "app-header" },
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {}, class: "logo-link",
                        span { class: "logo-mark", "🍺" }
                        span { class: "logo-text", "Vairagi Breweries" }
                    }
                }

                nav { class: "nav-links",
                    for (name , anchor) in NAV_ITEMS {
                        NavBarButton { key: "{anchor}", name, anchor }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "icon-button",
                        title: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
                        onclick: move |_| preferences.write().toggle_dark_mode(),
                        if is_dark {
                            "☀"
                        } else {
                            "☾"
                        }
                    }
                    ThemeMenu { preferences }
                    // decorative
                    button { class: "icon-button", title: "Notifications", "🔔" }
                    button {
                        class: "icon-button mobile-only",
                        onclick: move |_| mobile_open.toggle(),
                        if mobile_open() {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }

            if mobile_open() {
                nav { class: "mobile-menu",
                    for (name , anchor) in NAV_ITEMS {
                        NavBarButton {
                            key: "{anchor}",
                            name,
                            anchor,
                            onselect: move |_| mobile_open.set(false),
                        }
                    }
                }
            }
        }
    }
}

// layout for every route: navbar, the page, and the overlays (modal, toasts)
#[component]
pub fn NavBar() -> Element {
    let stores = use_stores();

    rsx! {
        NavBarInner { preferences: stores.preferences }
        main { class: "page", Outlet::<Route> {} }
        ModalBox { feedback: stores.feedback, config: stores.config }
        ToastHost {}
    }
}
