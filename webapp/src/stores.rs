use dioxus::prelude::*;

use common::{config::SiteConfig, feedback::FeedbackStore, preference::PreferenceStore};

use crate::common::{document::DocumentRoot, storage::LocalPreferences};

pub type Preferences = PreferenceStore<LocalPreferences, DocumentRoot>;

// handles to the site's state, created once by App
//
// route components pick this up from context; everything below a route gets
// the individual signal it needs as a prop
#[derive(Clone, Copy, PartialEq)]
pub struct Stores {
    pub feedback: Signal<FeedbackStore>,
    pub preferences: Signal<Preferences>,
    pub config: Signal<SiteConfig>,
}

pub fn use_stores() -> Stores {
    use_context::<Stores>()
}
