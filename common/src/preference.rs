use tracing::{debug, warn};

use api::theme::{Theme, ThemeKey};

pub const DARK_MODE_KEY: &str = "darkMode";
pub const THEME_KEY: &str = "theme";

pub const DARK_CLASS: &str = "dark";
pub const PRIMARY_VAR: &str = "--primary-color";
pub const SECONDARY_VAR: &str = "--secondary-color";
pub const ACCENT_VAR: &str = "--accent-color";

// durable key-value storage for the two preference keys
//
// values are stored as bare strings ("true"/"false", theme key), not json
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

// wherever the preferences become visible; on the web this is the document root
pub trait ThemeSurface {
    fn set_dark(&mut self, is_dark: bool);

    fn set_property(&mut self, name: &str, value: &str);
}

// preference store
//
// every mutation updates memory, writes through to storage and applies the
// visual effect before returning.  there is no batching and no deferred write
#[derive(Debug)]
pub struct PreferenceStore<S: PreferenceStorage, T: ThemeSurface> {
    is_dark: bool,
    current_theme: ThemeKey,
    storage: S,
    surface: T,
}

impl<S: PreferenceStorage, T: ThemeSurface> PreferenceStore<S, T> {
    // read both keys once and bring the surface in line with the result
    //
    // missing values use the defaults, any dark mode string but "true" is
    // false, and an unknown theme key falls back to the default theme
    pub fn restore(storage: S, surface: T) -> Self {
        let is_dark = storage.read(DARK_MODE_KEY).as_deref() == Some("true");

        let current_theme = match storage.read(THEME_KEY) {
            Some(value) => ThemeKey::parse(&value).unwrap_or_else(|| {
                debug!("unknown stored theme {value:?}, using default");
                ThemeKey::default()
            }),
            None => ThemeKey::default(),
        };

        let mut store = PreferenceStore {
            is_dark,
            current_theme,
            storage,
            surface,
        };

        store.surface.set_dark(is_dark);
        store.apply_theme();
        store
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn current_theme(&self) -> ThemeKey {
        self.current_theme
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.theme()
    }

    pub fn toggle_dark_mode(&mut self) {
        self.is_dark = !self.is_dark;

        let value = if self.is_dark { "true" } else { "false" };
        self.persist(DARK_MODE_KEY, value);
        self.surface.set_dark(self.is_dark);
    }

    pub fn select_theme(&mut self, key: ThemeKey) {
        self.current_theme = key;

        self.persist(THEME_KEY, key.as_str());
        self.apply_theme();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    fn apply_theme(&mut self) {
        let theme = self.current_theme.theme();

        self.surface.set_property(PRIMARY_VAR, theme.primary);
        self.surface.set_property(SECONDARY_VAR, theme.secondary);
        self.surface.set_property(ACCENT_VAR, theme.accent);
    }

    // a failed write leaves the in-memory state changed; the next mutation
    // tries again
    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.storage.write(key, value) {
            warn!("failed to persist preference {key}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
        fail_writes: bool,
    }

    impl MemoryStorage {
        fn with(pairs: &[(&str, &str)]) -> Self {
            MemoryStorage {
                values: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                fail_writes: false,
            }
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
            if self.fail_writes {
                return Err(anyhow::Error::msg("quota exceeded"));
            }
            self.values.insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        dark: Option<bool>,
        properties: HashMap<String, String>,
    }

    impl ThemeSurface for RecordingSurface {
        fn set_dark(&mut self, is_dark: bool) {
            self.dark = Some(is_dark);
        }

        fn set_property(&mut self, name: &str, value: &str) {
            self.properties.insert(name.to_owned(), value.to_owned());
        }
    }

    type TestStore = PreferenceStore<MemoryStorage, RecordingSurface>;

    fn restore(pairs: &[(&str, &str)]) -> TestStore {
        PreferenceStore::restore(MemoryStorage::with(pairs), RecordingSurface::default())
    }

    #[test]
    fn empty_storage_uses_defaults() {
        let store = restore(&[]);

        assert!(!store.is_dark());
        assert_eq!(store.current_theme(), ThemeKey::NeonPurple);
        assert_eq!(store.surface().dark, Some(false));
        assert_eq!(store.surface().properties[PRIMARY_VAR], "#8B5CF6");
    }

    #[test]
    fn stored_values_are_restored() {
        let store = restore(&[(DARK_MODE_KEY, "true"), (THEME_KEY, "cyberBlue")]);

        assert!(store.is_dark());
        assert_eq!(store.current_theme(), ThemeKey::CyberBlue);
        assert_eq!(store.theme().name, "Cyber Blue");
        assert_eq!(store.surface().dark, Some(true));
    }

    #[test]
    fn corrupt_values_fall_back_silently() {
        let store = restore(&[(DARK_MODE_KEY, "yes"), (THEME_KEY, "hotPink")]);

        assert!(!store.is_dark());
        assert_eq!(store.current_theme(), ThemeKey::NeonPurple);
        assert_eq!(store.surface().properties[ACCENT_VAR], "#C4B5FD");
    }

    #[test]
    fn double_toggle_round_trips_and_persists_each_step() {
        let mut store = restore(&[]);
        let before = store.is_dark();

        store.toggle_dark_mode();
        assert_eq!(store.storage().read(DARK_MODE_KEY).as_deref(), Some("true"));
        assert_eq!(store.surface().dark, Some(true));

        store.toggle_dark_mode();
        assert_eq!(store.is_dark(), before);
        assert_eq!(store.storage().read(DARK_MODE_KEY).as_deref(), Some("false"));
        assert_eq!(store.surface().dark, Some(false));
    }

    #[test]
    fn selecting_a_theme_sets_all_three_variables() {
        let mut store = restore(&[]);

        for key in ThemeKey::all() {
            store.select_theme(key);

            let theme = key.theme();
            let properties = &store.surface().properties;
            assert_eq!(store.current_theme(), key);
            assert_eq!(properties[PRIMARY_VAR], theme.primary);
            assert_eq!(properties[SECONDARY_VAR], theme.secondary);
            assert_eq!(properties[ACCENT_VAR], theme.accent);
            assert_eq!(store.storage().read(THEME_KEY).as_deref(), Some(key.as_str()));
        }
    }

    #[test]
    fn failed_writes_still_change_state() {
        let mut storage = MemoryStorage::default();
        storage.fail_writes = true;
        let mut store = PreferenceStore::restore(storage, RecordingSurface::default());

        store.toggle_dark_mode();
        store.select_theme(ThemeKey::SunsetOrange);

        assert!(store.is_dark());
        assert_eq!(store.current_theme(), ThemeKey::SunsetOrange);
        assert_eq!(store.surface().properties[PRIMARY_VAR], "#F59E0B");
        assert_eq!(store.storage().read(THEME_KEY), None);
    }
}
