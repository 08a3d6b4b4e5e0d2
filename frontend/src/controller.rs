//! Page controller: turns the viewport's scroll position into nav bar state
//! and performs anchored navigation between sections.

use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use yew::Reducible;

use crate::config::ScrollConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no section with id `{0}` is rendered")]
    SectionNotFound(String),
    #[error("viewport unavailable: {0}")]
    Viewport(String),
}

/// One reading of the viewport's vertical scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    /// Largest reachable offset (document height minus viewport height).
    pub max_offset: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, max_offset: f64) -> Self {
        Self { offset, max_offset }
    }

    /// Fraction of the scrollable distance traversed, clamped to [0, 1].
    pub fn progress(&self) -> f64 {
        if self.max_offset.is_nan() || self.max_offset <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / self.max_offset).clamp(0.0, 1.0)
    }
}

/// What the controller needs from the environment.
pub trait Viewport {
    fn metrics(&self) -> ScrollMetrics;

    /// Smooth-scrolls the element with `section_id` to the top of the viewport.
    fn scroll_to_section(&self, section_id: &str) -> Result<(), NavigationError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub config: ScrollConfig,
    pub is_mobile_menu_open: bool,
    pub is_scrolled_past_threshold: bool,
    pub scroll_progress_ratio: f64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

pub enum PageAction {
    Scrolled(ScrollMetrics),
    ToggleMobileMenu,
    CloseMobileMenu,
}

impl PageState {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            is_mobile_menu_open: false,
            is_scrolled_past_threshold: false,
            scroll_progress_ratio: 0.0,
        }
    }

    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Scrolled(metrics) => {
                self.is_scrolled_past_threshold = metrics.offset > self.config.threshold_px;
                self.scroll_progress_ratio = metrics.progress();
            }
            PageAction::ToggleMobileMenu => self.is_mobile_menu_open = !self.is_mobile_menu_open,
            PageAction::CloseMobileMenu => self.is_mobile_menu_open = false,
        }
    }

    pub fn nav_opacity(&self) -> f64 {
        self.config.nav_opacity(self.scroll_progress_ratio)
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            // Unchanged state keeps the same Rc so scroll ticks don't re-render.
            return self;
        }
        Rc::new(next)
    }
}

/// Reads the viewport into the action that refreshes the scroll-derived state.
pub fn scroll_action<V: Viewport + ?Sized>(viewport: &V) -> PageAction {
    PageAction::Scrolled(viewport.metrics())
}

/// Scrolls to `section_id` if it exists and returns the action that closes the
/// mobile menu. A missing section is logged and otherwise ignored; callers
/// never see the error and the menu closes either way.
pub fn navigate_to_section<V: Viewport + ?Sized>(viewport: &V, section_id: &str) -> PageAction {
    match viewport.scroll_to_section(section_id) {
        Ok(()) => debug!("Scrolled to section {}", section_id),
        Err(err) => warn!("Navigation skipped: {}", err),
    }
    PageAction::CloseMobileMenu
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeViewport {
        offset: Cell<f64>,
        max_offset: f64,
        sections: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn new(max_offset: f64, sections: &[&'static str]) -> Self {
            Self {
                offset: Cell::new(0.0),
                max_offset,
                sections: sections.to_vec(),
                scrolled_to: RefCell::new(Vec::new()),
            }
        }

        fn page() -> Self {
            Self::new(2000.0, &["home", "konum", "iletisim"])
        }
    }

    impl Viewport for FakeViewport {
        fn metrics(&self) -> ScrollMetrics {
            ScrollMetrics::new(self.offset.get(), self.max_offset)
        }

        fn scroll_to_section(&self, section_id: &str) -> Result<(), NavigationError> {
            if !self.sections.contains(&section_id) {
                return Err(NavigationError::SectionNotFound(section_id.to_string()));
            }
            self.scrolled_to.borrow_mut().push(section_id.to_string());
            Ok(())
        }
    }

    fn scrolled_to(viewport: &FakeViewport, offset: f64, config: ScrollConfig) -> Rc<PageState> {
        viewport.offset.set(offset);
        Rc::new(PageState::new(config)).reduce(scroll_action(viewport))
    }

    fn scrolled_at(offset: f64) -> bool {
        scrolled_to(&FakeViewport::page(), offset, ScrollConfig::default()).is_scrolled_past_threshold
    }

    #[test]
    fn initial_state_is_closed_and_unscrolled() {
        let state = PageState::default();
        assert!(!state.is_mobile_menu_open);
        assert!(!state.is_scrolled_past_threshold);
        assert_eq!(state.scroll_progress_ratio, 0.0);
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        assert!(!scrolled_at(0.0));
        assert!(!scrolled_at(49.9));
        assert!(!scrolled_at(50.0));
        assert!(scrolled_at(50.1));
        assert!(scrolled_at(1200.0));
    }

    #[test]
    fn scrolling_back_above_threshold_clears_flag() {
        let viewport = FakeViewport::page();
        let state = scrolled_to(&viewport, 300.0, ScrollConfig::default());
        assert!(state.is_scrolled_past_threshold);
        viewport.offset.set(10.0);
        let state = state.reduce(scroll_action(&viewport));
        assert!(!state.is_scrolled_past_threshold);
    }

    #[test]
    fn scroll_action_is_idempotent() {
        let viewport = FakeViewport::page();
        let first = scrolled_to(&viewport, 640.0, ScrollConfig::default());
        let second = first.clone().reduce(scroll_action(&viewport));
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn threshold_follows_config() {
        let config = ScrollConfig {
            threshold_px: 200.0,
            ..ScrollConfig::default()
        };
        let state = scrolled_to(&FakeViewport::new(1000.0, &[]), 150.0, config);
        assert!(!state.is_scrolled_past_threshold);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let viewport = FakeViewport::page();
        let mut state = Rc::new(PageState::default());
        let mut previous = 0.0;
        for step in 0..=25 {
            viewport.offset.set(step as f64 * 100.0);
            state = state.reduce(scroll_action(&viewport));
            let progress = state.scroll_progress_ratio;
            assert!((0.0..=1.0).contains(&progress));
            assert!(progress >= previous);
            previous = progress;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn progress_endpoints() {
        assert_eq!(ScrollMetrics::new(0.0, 2000.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(2000.0, 2000.0).progress(), 1.0);
        assert_eq!(ScrollMetrics::new(500.0, 2000.0).progress(), 0.25);
    }

    #[test]
    fn progress_clamps_overscroll_and_short_pages() {
        assert_eq!(ScrollMetrics::new(2300.0, 2000.0).progress(), 1.0);
        assert_eq!(ScrollMetrics::new(-40.0, 2000.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(0.0, 0.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(0.0, -10.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(10.0, f64::NAN).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(f64::NAN, 100.0).progress(), 0.0);
    }

    #[test]
    fn progress_follows_a_taller_page_without_scrolling() {
        let short = ScrollMetrics::new(1000.0, 1000.0);
        let grown = ScrollMetrics::new(1000.0, 4000.0);
        let state = Rc::new(PageState::default()).reduce(PageAction::Scrolled(short));
        assert_eq!(state.scroll_progress_ratio, 1.0);
        let state = state.reduce(PageAction::Scrolled(grown));
        assert_eq!(state.scroll_progress_ratio, 0.25);
    }

    #[test]
    fn navigate_to_existing_section_scrolls_and_closes_menu() {
        let viewport = FakeViewport::page();
        let state = Rc::new(PageState::default()).reduce(PageAction::ToggleMobileMenu);
        assert!(state.is_mobile_menu_open);

        let state = state.reduce(navigate_to_section(&viewport, "konum"));

        assert_eq!(*viewport.scrolled_to.borrow(), vec!["konum".to_string()]);
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn navigate_with_closed_menu_keeps_it_closed() {
        let viewport = FakeViewport::page();
        let state = Rc::new(PageState::default()).reduce(navigate_to_section(&viewport, "home"));
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn navigate_to_missing_section_only_closes_menu() {
        let viewport = FakeViewport::page();
        let state = scrolled_to(&viewport, 120.0, ScrollConfig::default())
            .reduce(PageAction::ToggleMobileMenu);
        let before = viewport.metrics();

        let state = state.reduce(navigate_to_section(&viewport, "nonexistent"));

        assert!(viewport.scrolled_to.borrow().is_empty());
        assert_eq!(viewport.metrics(), before);
        assert!(!state.is_mobile_menu_open);
        assert!(state.is_scrolled_past_threshold);
    }

    #[test]
    fn navigation_works_through_a_trait_object() {
        let viewport = FakeViewport::page();
        let dynamic: &dyn Viewport = &viewport;
        let state = Rc::new(PageState::default())
            .reduce(PageAction::ToggleMobileMenu)
            .reduce(navigate_to_section(dynamic, "iletisim"));
        assert_eq!(*viewport.scrolled_to.borrow(), vec!["iletisim".to_string()]);
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn toggling_twice_restores_closed_menu() {
        let state = Rc::new(PageState::default())
            .reduce(PageAction::ToggleMobileMenu)
            .reduce(PageAction::ToggleMobileMenu);
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn reducer_reuses_state_when_nothing_changes() {
        let state = Rc::new(PageState::default());
        let next = state.clone().reduce(PageAction::CloseMobileMenu);
        assert!(Rc::ptr_eq(&state, &next));

        let toggled = state.clone().reduce(PageAction::ToggleMobileMenu);
        assert!(!Rc::ptr_eq(&state, &toggled));
        assert!(toggled.is_mobile_menu_open);
    }

    #[test]
    fn reducer_tracks_nav_opacity() {
        let state = Rc::new(PageState::default());
        let next = state.reduce(PageAction::Scrolled(ScrollMetrics::new(100.0, 2000.0)));
        assert!((next.nav_opacity() - 0.9).abs() < 1e-9);
    }
}
