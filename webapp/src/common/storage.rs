use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::preference::PreferenceStorage;

// browser localStorage, as seen by the preference store
//
// the two preference keys hold bare strings ("true", "neonPurple"), so this
// goes through the raw web_sys handle instead of gloo's json helpers
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl PreferenceStorage for LocalPreferences {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        })
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
