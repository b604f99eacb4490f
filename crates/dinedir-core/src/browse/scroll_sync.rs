// ============================================================================
// DineDir Core - Category Scroll-Sync Controller
// File: crates/dinedir-core/src/browse/scroll_sync.rs
// ============================================================================
//! Keeps the active category tab consistent with viewport scroll position

use std::time::{Duration, Instant};

use super::viewport::Viewport;

/// Sections scroll to rest just below the fixed page header.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Added to the raw scroll offset before classifying, so the tab flips a
/// little ahead of the section edge.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// A section starts counting slightly above its measured top.
pub const SECTION_ENTRY_BUFFER_PX: f64 = 50.0;

/// How long scroll-driven reclassification stays suppressed after a tab tap.
/// Time-based because the platform offers no scroll-completion signal.
pub const SETTLE_WINDOW: Duration = Duration::from_millis(500);

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Stateful controller binding the tab strip to the stacked sections.
///
/// The embedding shell throttles `handle_scroll` to one call per animation
/// frame and drops the controller (detaching its scroll listener) on
/// teardown.
pub struct ScrollSyncController<C: Clock = MonotonicClock> {
    categories: Vec<String>,
    active: Option<String>,
    settle_until: Option<Instant>,
    clock: C,
}

impl ScrollSyncController<MonotonicClock> {
    pub fn new(categories: Vec<String>) -> Self {
        Self::with_clock(categories, MonotonicClock)
    }
}

impl<C: Clock> ScrollSyncController<C> {
    pub fn with_clock(categories: Vec<String>, clock: C) -> Self {
        let active = categories.first().cloned();
        Self {
            categories,
            active,
            settle_until: None,
            clock,
        }
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Activates a tapped tab and scrolls its section under the header.
    ///
    /// The settle window restarts on every call; a quick re-tap must not
    /// inherit an older, shorter deadline and flicker back.
    pub fn select_category(&mut self, category: &str, viewport: &mut dyn Viewport) {
        if !self.categories.iter().any(|c| c == category) {
            return;
        }
        self.active = Some(category.to_string());
        if let Some(span) = viewport.section_span(category) {
            viewport.scroll_to(span.top - HEADER_OFFSET_PX);
            self.settle_until = Some(self.clock.now() + SETTLE_WINDOW);
        }
    }

    /// Reclassifies the active category from the current scroll position.
    ///
    /// No-op while a tap-initiated scroll is settling. The first section in
    /// display order whose span contains the effective position wins; when
    /// none does, the first category is active.
    pub fn handle_scroll(&mut self, viewport: &mut dyn Viewport) {
        if self.categories.is_empty() {
            return;
        }
        if let Some(deadline) = self.settle_until {
            if self.clock.now() < deadline {
                return;
            }
            self.settle_until = None;
        }

        let position = viewport.scroll_offset() + SCROLL_LOOKAHEAD_PX;
        let mut current = self.categories[0].clone();
        for category in &self.categories {
            if let Some(span) = viewport.section_span(category) {
                if position >= span.top - SECTION_ENTRY_BUFFER_PX && position < span.bottom {
                    current = category.clone();
                    break;
                }
            }
        }

        if self.active.as_deref() != Some(current.as_str()) {
            self.active = Some(current.clone());
            viewport.center_tab(&current);
        }
    }
}
