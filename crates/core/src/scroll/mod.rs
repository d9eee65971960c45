//! Scroll-state synchronizer: one scroll read, several derived UI states.

pub mod active;
pub mod parallax;
pub mod sync;

pub use active::update_active_section;
pub use parallax::compute_parallax;
pub use sync::{FrameGate, ScrollSynchronizer};

use crate::config::ScrollConfig;

/// Whether the navbar should carry its `scrolled` class.
pub fn update_navbar_state(scroll_y: f64, config: &ScrollConfig) -> bool {
    scroll_y > config.navbar_threshold
}

/// Whether the back-to-top control should be shown.
pub fn update_back_to_top_visibility(scroll_y: f64, config: &ScrollConfig) -> bool {
    scroll_y > config.back_to_top_threshold
}
