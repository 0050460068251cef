use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use common::preference::{DARK_CLASS, ThemeSurface};

fn document_root() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

// the <html> element: dark mode is a class on it, theme colors are custom
// properties on its inline style
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn set_dark(&mut self, is_dark: bool) {
        let Some(root) = document_root() else {
            debug!("no document root, skipping dark mode class");
            return;
        };

        if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, is_dark) {
            warn!("failed to toggle {DARK_CLASS} class: {err:?}");
        }
    }

    fn set_property(&mut self, name: &str, value: &str) {
        let Some(root) = document_root() else {
            debug!("no document root, skipping {name}");
            return;
        };

        if let Err(err) = root.style().set_property(name, value) {
            warn!("failed to set {name}: {err:?}");
        }
    }
}

// smooth-scroll to a section anchor
//
// returns false when the section is not on the current page, so the caller can
// navigate instead
pub fn scroll_to_section(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
