use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tuning for the navigation bar's reaction to scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Offset in pixels past which the nav bar switches to its solid style.
    /// The comparison is strict: sitting exactly on the threshold is not "scrolled".
    pub threshold_px: f64,
    /// Progress range over which the nav bar opacity is interpolated.
    pub fade_start: f64,
    pub fade_end: f64,
    pub opacity_from: f64,
    pub opacity_to: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: 50.0,
            fade_start: 0.0,
            fade_end: 0.1,
            opacity_from: 1.0,
            opacity_to: 0.8,
        }
    }
}

impl ScrollConfig {
    /// Nav bar opacity for a given scroll progress, linear inside the fade
    /// range and clamped to its end values outside it.
    pub fn nav_opacity(&self, progress: f64) -> f64 {
        if progress <= self.fade_start || self.fade_end <= self.fade_start {
            return self.opacity_from;
        }
        if progress >= self.fade_end {
            return self.opacity_to;
        }
        let t = (progress - self.fade_start) / (self.fade_end - self.fade_start);
        self.opacity_from + (self.opacity_to - self.opacity_from) * t
    }
}

/// Intersection settings shared by every in-view reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub root_margin: &'static str,
    pub threshold: f64,
    /// Delay before on-mount reveals flip to visible, so the hidden pose gets painted first.
    pub mount_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: "0px 0px -100px 0px",
            threshold: 0.0,
            mount_delay_ms: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn nav_opacity_interpolates_over_fade_range() {
        let config = ScrollConfig::default();
        assert!(approx(config.nav_opacity(0.0), 1.0));
        assert!(approx(config.nav_opacity(0.05), 0.9));
        assert!(approx(config.nav_opacity(0.1), 0.8));
    }

    #[test]
    fn nav_opacity_is_constant_past_fade_end() {
        let config = ScrollConfig::default();
        assert!(approx(config.nav_opacity(0.5), 0.8));
        assert!(approx(config.nav_opacity(1.0), 0.8));
    }

    #[test]
    fn degenerate_fade_range_keeps_initial_opacity() {
        let config = ScrollConfig {
            fade_end: 0.0,
            ..ScrollConfig::default()
        };
        assert!(approx(config.nav_opacity(0.7), 1.0));
    }
}
