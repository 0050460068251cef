#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

// the site-wide stores live in the shared crate, not the local common module
use ::common::{config::read_config, feedback::FeedbackStore, preference::PreferenceStore};

mod common;

mod components;
use components::navigation::NavBar;

mod stores;
use stores::Stores;

mod home;
use home::{Home, NotFound};

mod dashboard;
use dashboard::DashboardPage;

mod reviews;
use reviews::ReviewsPage;

mod brewing_plans;
use brewing_plans::BrewingPlansPage;

mod contact;
use contact::ContactPage;

use crate::common::{document::DocumentRoot, storage::LocalPreferences};

// compiled in, since there is no filesystem to read it from at runtime
const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/dashboard")]
        DashboardPage {},
        #[route("/reviews")]
        ReviewsPage {},
        #[route("/brewing-plans")]
        BrewingPlansPage {},
        #[route("/contact")]
        ContactPage {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_signal(|| read_config(SITE_CONFIG));
    let feedback = use_signal(FeedbackStore::seeded);

    // applies the stored mode and palette to the page before the first render
    let preferences = use_signal(|| PreferenceStore::restore(LocalPreferences, DocumentRoot));

    use_context_provider(|| Stores {
        feedback,
        preferences,
        config,
    });

    rsx! {
        style { "{crate::common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
