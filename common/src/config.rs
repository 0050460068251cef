use serde::{Deserialize, Serialize};
use tracing::{Level, debug, error, instrument};

use api::contact::DEFAULT_RELAY_URL;

// site configuration
//
// the webapp has no filesystem, so the document is compiled into the binary and
// parsed once at startup.  every field has a default so that a partial (or
// broken) document still produces a usable site
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // where the contact form is posted
    pub contact_relay_url: String,

    // cosmetic wait between storing feedback and acknowledging it
    pub feedback_delay_ms: u32,

    // how long a toast stays on screen
    pub toast_duration_ms: u32,

    // hero counters
    pub hero_animation_delay_ms: u32,
    pub hero_animation_ms: u32,
    pub hero_animation_steps: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            contact_relay_url: String::from(DEFAULT_RELAY_URL),
            feedback_delay_ms: 2000,
            toast_duration_ms: 4000,
            hero_animation_delay_ms: 500,
            hero_animation_ms: 2000,
            hero_animation_steps: 60,
        }
    }
}

// the config table is a subtable of the root node, leaving room for other
// sections in the same document
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

impl SiteConfig {
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let data: TomlConfigFile = toml::from_str(doc)?;

        Ok(data.config)
    }

    // interval between two animation frames of the hero counters
    pub fn hero_step_ms(&self) -> u32 {
        self.hero_animation_ms / self.hero_animation_steps.max(1)
    }
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> SiteConfig {
    debug!("reading site config");

    match SiteConfig::from_toml(doc) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to parse site config, using defaults: {err}");
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(SiteConfig::from_toml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_table_overrides_only_named_fields() {
        let doc = r#"
            [config]
            feedback_delay_ms = 10
            contact_relay_url = "http://localhost:9999/relay"
        "#;

        let config = SiteConfig::from_toml(doc).unwrap();
        assert_eq!(config.feedback_delay_ms, 10);
        assert_eq!(config.contact_relay_url, "http://localhost:9999/relay");
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.hero_animation_steps, 60);
    }

    #[test]
    fn broken_document_falls_back() {
        let config = read_config("[config\nfeedback_delay_ms = ");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn wrong_type_is_an_error() {
        let doc = "[config]\nfeedback_delay_ms = \"soon\"\n";
        assert!(SiteConfig::from_toml(doc).is_err());
    }

    #[test]
    fn hero_step_never_divides_by_zero() {
        let config = SiteConfig {
            hero_animation_steps: 0,
            ..Default::default()
        };
        assert_eq!(config.hero_step_ms(), 2000);
        assert_eq!(SiteConfig::default().hero_step_ms(), 33);
    }
}
