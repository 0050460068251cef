use std::fmt;

use serde::{Deserialize, Serialize};

// the static theme table
//
// there is no dynamic registration, so a ThemeKey always resolves to a Theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeKey {
    #[default]
    NeonPurple,
    SunsetOrange,
    CyberBlue,
    EmeraldGreen,
    MinimalWhite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

pub const THEMES: [(ThemeKey, Theme); 5] = [
    (
        ThemeKey::NeonPurple,
        Theme {
            name: "Neon Purple",
            primary: "#8B5CF6",
            secondary: "#A78BFA",
            accent: "#C4B5FD",
        },
    ),
    (
        ThemeKey::SunsetOrange,
        Theme {
            name: "Sunset Orange",
            primary: "#F59E0B",
            secondary: "#FBBF24",
            accent: "#FCD34D",
        },
    ),
    (
        ThemeKey::CyberBlue,
        Theme {
            name: "Cyber Blue",
            primary: "#3B82F6",
            secondary: "#60A5FA",
            accent: "#93C5FD",
        },
    ),
    (
        ThemeKey::EmeraldGreen,
        Theme {
            name: "Emerald Green",
            primary: "#10B981",
            secondary: "#34D399",
            accent: "#6EE7B7",
        },
    ),
    (
        ThemeKey::MinimalWhite,
        Theme {
            name: "Minimal White",
            primary: "#6B7280",
            secondary: "#9CA3AF",
            accent: "#D1D5DB",
        },
    ),
];

impl ThemeKey {
    pub fn all() -> Vec<Self> {
        THEMES.iter().map(|(key, _)| *key).collect()
    }

    pub fn theme(self) -> Theme {
        // THEMES has one row per variant, in declaration order
        THEMES[self as usize].1
    }

    // the string written to durable storage
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NeonPurple => "neonPurple",
            Self::SunsetOrange => "sunsetOrange",
            Self::CyberBlue => "cyberBlue",
            Self::EmeraldGreen => "emeraldGreen",
            Self::MinimalWhite => "minimalWhite",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|key| key.as_str() == value)
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_match_their_keys() {
        for (index, (key, _)) in THEMES.iter().enumerate() {
            assert_eq!(*key as usize, index);
        }
    }

    #[test]
    fn keys_round_trip_through_storage_strings() {
        for key in ThemeKey::all() {
            assert_eq!(ThemeKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(ThemeKey::parse("hotPink"), None);
        assert_eq!(ThemeKey::parse(""), None);
    }

    #[test]
    fn default_is_neon_purple() {
        let theme = ThemeKey::default().theme();
        assert_eq!(theme.name, "Neon Purple");
        assert_eq!(theme.primary, "#8B5CF6");
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&ThemeKey::EmeraldGreen).unwrap();
        assert_eq!(json, "\"emeraldGreen\"");
    }
}
