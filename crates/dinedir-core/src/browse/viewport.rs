//! Viewport port for the scroll-sync controller

/// Vertical extent of one category's content section, in document
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub bottom: f64,
}

/// Layout measurements and scroll commands supplied by the embedding shell.
pub trait Viewport {
    /// Current vertical scroll offset of the content viewport.
    fn scroll_offset(&self) -> f64;

    /// The span of a category's section, measured from live layout on every
    /// call; content height shifts as images load, so spans are never cached.
    fn section_span(&self, category: &str) -> Option<SectionSpan>;

    /// Smooth-scrolls the content viewport to the given offset. A new call
    /// supersedes any scroll still in flight.
    fn scroll_to(&mut self, offset: f64);

    /// Smooth-scrolls the tab strip so the category's tab midpoint aligns
    /// with the strip midpoint.
    fn center_tab(&mut self, category: &str);
}
