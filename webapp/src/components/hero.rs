use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::{
    config::SiteConfig,
    tween::{HERO_TARGETS, HeroStats},
};

use crate::common::{BEERS_ANCHOR, document::scroll_to_section};

const BREWERY_MAP_URL: &str = "https://maps.google.com";

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    config: Signal<SiteConfig>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let config = props.config;
    let mut stats = use_signal(HeroStats::default);

    // counters tween up to fixed targets once, shortly after mount
    use_future(move || async move {
        let config = config();
        let steps = config.hero_animation_steps;

        TimeoutFuture::new(config.hero_animation_delay_ms).await;

        if steps == 0 {
            stats.set(HERO_TARGETS);
            return;
        }
        for step in 1..=steps {
            TimeoutFuture::new(config.hero_step_ms()).await;
            stats.set(HeroStats::frame(HERO_TARGETS, step, steps));
        }
    });

    let current = stats();
    let rating = current.rating_label();

    rsx! {
        section { class: "hero",
            div { class: "hero-orbs",
                for i in 0..8 {
                    div { key: "{i}", class: "hero-orb orb-{i}" }
                }
            }
            div { class: "container",
                div { class: "hero-content",
                    h1 { class: "hero-title",
                        span { class: "hero-glow", "Craft Beer." }
                        br {}
                        span { class: "hero-gradient", "Your Taste." }
                    }
                    p { class: "hero-subtitle",
                        "Share your thoughts on Vairagi Breweries' craft beers and help us brew the perfect experience for every beer lover."
                    }
                    div { class: "hero-actions",
                        button {
                            class: "btn btn-primary btn-lg",
                            onclick: move |_| {
                                scroll_to_section(BEERS_ANCHOR);
                            },
                            "Try Our Beers →"
                        }
                        a {
                            class: "btn btn-secondary btn-lg",
                            href: BREWERY_MAP_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Visit Brewery"
                        }
                    }

                    div { class: "hero-stats",
                        HeroStat { icon: "★", label: "Beer Varieties", value: "{current.products}+" }
                        HeroStat { icon: "💬", label: "Reviews", value: "{current.feedback}+" }
                        HeroStat { icon: "👥", label: "Beer Lovers", value: "{current.users}+" }
                        HeroStat { icon: "📈", label: "Avg Rating", value: "{rating}/5" }
                    }
                }
            }
            div { class: "scroll-indicator", div { class: "scroll-dot" } }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct HeroStatProps {
    icon: &'static str,
    label: &'static str,
    value: String,
}

#[component]
fn HeroStat(props: HeroStatProps) -> Element {
    rsx! {
        div { class: "hero-stat",
            div { class: "hero-stat-icon", "{props.icon}" }
            div { class: "hero-stat-value", "{props.value}" }
            div { class: "hero-stat-label", "{props.label}" }
        }
    }
}
