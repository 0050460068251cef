use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::{
    Route, brewing_plans::BrewingPlans, components::hero::Hero, contact::Contact,
    dashboard::Dashboard, reviews::Reviews, stores::use_stores,
};

// the landing page stacks every section, so the navbar can scroll between them
#[component]
pub fn Home() -> Element {
    let stores = use_stores();

    rsx! {
        div { class: "home-container",
            Hero { config: stores.config }
            Dashboard {}
            Reviews { feedback: stores.feedback }
            BrewingPlans {}
            Contact { config: stores.config }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    warn!("no route for /{path}");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "Nothing is brewing at /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to the brewery" }
        }
    }
}
