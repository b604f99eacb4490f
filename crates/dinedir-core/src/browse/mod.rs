//! Interactive menu browsing
//!
//! The category tab strip and the stacked category sections stay in sync
//! bidirectionally: tapping a tab scrolls to its section, and scrolling past
//! a section boundary activates its tab. The controller is platform agnostic;
//! a browser shell binds real layout geometry to the [`Viewport`] port and
//! feeds the controller throttled scroll ticks.

pub mod scroll_sync;
pub mod viewport;

pub use scroll_sync::{Clock, MonotonicClock, ScrollSyncController};
pub use viewport::{SectionSpan, Viewport};
