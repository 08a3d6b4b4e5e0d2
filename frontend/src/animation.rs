//! Reveal presets as plain data. Each preset is a hidden pose, a visible pose
//! and a timing; `stylesheet()` renders them to CSS classes toggled by the
//! reveal components.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x_px: f64,
    pub y_px: f64,
    pub scale: f64,
}

impl Pose {
    pub const fn shown() -> Self {
        Self { opacity: 1.0, x_px: 0.0, y_px: 0.0, scale: 1.0 }
    }

    const fn hidden() -> Self {
        Self { opacity: 0.0, ..Self::shown() }
    }

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x_px, self.y_px, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub hidden: Pose,
    pub visible: Pose,
    pub duration_s: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealPreset {
    FadeInUp,
    FadeIn,
    ScaleIn,
    SlideInLeft,
    SlideInRight,
}

impl RevealPreset {
    pub const ALL: [RevealPreset; 5] = [
        RevealPreset::FadeInUp,
        RevealPreset::FadeIn,
        RevealPreset::ScaleIn,
        RevealPreset::SlideInLeft,
        RevealPreset::SlideInRight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RevealPreset::FadeInUp => "fade-in-up",
            RevealPreset::FadeIn => "fade-in",
            RevealPreset::ScaleIn => "scale-in",
            RevealPreset::SlideInLeft => "slide-in-left",
            RevealPreset::SlideInRight => "slide-in-right",
        }
    }

    pub fn class(&self) -> String {
        format!("reveal-{}", self.name())
    }

    pub fn transition(&self) -> Transition {
        let hidden = Pose::hidden();
        let (hidden, duration_s) = match self {
            RevealPreset::FadeInUp => (Pose { y_px: 60.0, ..hidden }, 0.8),
            RevealPreset::FadeIn => (hidden, 0.8),
            RevealPreset::ScaleIn => (Pose { scale: 0.8, ..hidden }, 0.6),
            RevealPreset::SlideInLeft => (Pose { x_px: -80.0, ..hidden }, 0.8),
            RevealPreset::SlideInRight => (Pose { x_px: 80.0, ..hidden }, 0.8),
        };
        Transition {
            hidden,
            visible: Pose::shown(),
            duration_s,
        }
    }

    fn css(&self) -> String {
        let transition = self.transition();
        let class = self.class();
        format!(
            ".{class} {{ {hidden} transition: opacity {d}s ease-out, transform {d}s ease-out; will-change: opacity, transform; }}\n\
             .{class}.revealed {{ {visible} }}\n",
            class = class,
            hidden = transition.hidden.css(),
            visible = transition.visible.css(),
            d = transition.duration_s,
        )
    }
}

/// Child timing inside a staggered container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_children_s: f64,
    pub stagger_children_s: f64,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            delay_children_s: 0.2,
            stagger_children_s: 0.15,
        }
    }
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children_s + index as f64 * self.stagger_children_s
    }
}

/// CSS for every preset plus the looping hero/nav keyframes.
pub fn stylesheet() -> String {
    let mut css: String = RevealPreset::ALL.iter().map(RevealPreset::css).collect();
    css.push_str(KEYFRAMES);
    css
}

const KEYFRAMES: &str = r#"
@keyframes nav-drop-in {
    from { transform: translateY(-100px); }
    to { transform: translateY(0); }
}
@keyframes hero-tilt {
    0%, 100% { transform: rotate(3deg); }
    50% { transform: rotate(6deg); }
}
@keyframes hero-pulse {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.05); }
}
@media (prefers-reduced-motion: reduce) {
    [class*="reveal-"] { transition: none !important; opacity: 1 !important; transform: none !important; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_start_hidden_and_end_shown() {
        for preset in RevealPreset::ALL {
            let transition = preset.transition();
            assert_eq!(transition.hidden.opacity, 0.0, "{}", preset.name());
            assert_eq!(transition.visible, Pose::shown());
        }
    }

    #[test]
    fn preset_offsets() {
        assert_eq!(RevealPreset::FadeInUp.transition().hidden.y_px, 60.0);
        assert_eq!(RevealPreset::SlideInLeft.transition().hidden.x_px, -80.0);
        assert_eq!(RevealPreset::SlideInRight.transition().hidden.x_px, 80.0);
        assert_eq!(RevealPreset::ScaleIn.transition().hidden.scale, 0.8);
        assert_eq!(RevealPreset::ScaleIn.transition().duration_s, 0.6);
    }

    #[test]
    fn stylesheet_has_a_rule_pair_per_preset() {
        let css = stylesheet();
        for preset in RevealPreset::ALL {
            assert!(css.contains(&format!(".{} {{", preset.class())));
            assert!(css.contains(&format!(".{}.revealed", preset.class())));
        }
        assert!(css.contains("translate(0px, 60px) scale(1)"));
    }

    #[test]
    fn stagger_delays_step_by_configured_interval() {
        let stagger = Stagger::default();
        assert!((stagger.delay_for(0) - 0.2).abs() < 1e-9);
        assert!((stagger.delay_for(1) - 0.35).abs() < 1e-9);
        assert!((stagger.delay_for(3) - 0.65).abs() < 1e-9);
    }
}
