// counter animation for the hero section
//
// purely cosmetic: the targets are fixed and nothing reads the values back

pub fn ease_out_cubic(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroStats {
    pub products: u32,
    pub feedback: u32,
    pub users: u32,
    pub rating: f64,
}

pub const HERO_TARGETS: HeroStats = HeroStats {
    products: 25,
    feedback: 3247,
    users: 12800,
    rating: 4.4,
};

impl HeroStats {
    // the values shown after `step` of `steps` frames
    pub fn frame(target: HeroStats, step: u32, steps: u32) -> HeroStats {
        let progress = if steps == 0 {
            1.0
        } else {
            f64::from(step) / f64::from(steps)
        };
        let eased = ease_out_cubic(progress);

        let scale = |value: u32| (f64::from(value) * eased).floor() as u32;

        HeroStats {
            products: scale(target.products),
            feedback: scale(target.feedback),
            users: scale(target.users),
            rating: target.rating * eased,
        }
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn first_and_last_frames() {
        assert_eq!(HeroStats::frame(HERO_TARGETS, 0, 60), HeroStats::default());

        let last = HeroStats::frame(HERO_TARGETS, 60, 60);
        assert_eq!(last.products, 25);
        assert_eq!(last.feedback, 3247);
        assert_eq!(last.users, 12800);
        assert_eq!(last.rating_label(), "4.4");
    }

    #[test]
    fn frames_never_decrease() {
        let frames: Vec<HeroStats> = (0..=60).map(|s| HeroStats::frame(HERO_TARGETS, s, 60)).collect();
        assert!(frames.windows(2).all(|w| w[0].users <= w[1].users));
    }

    #[test]
    fn zero_steps_jumps_to_target() {
        assert_eq!(HeroStats::frame(HERO_TARGETS, 0, 0).products, 25);
    }
}
