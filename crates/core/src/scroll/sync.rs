use crate::config::{FolioConfig, ParallaxConfig, ScrollConfig};
use crate::model::{NavLinkState, ScrollSnapshot, UiState};

use super::{
    compute_parallax, update_active_section, update_back_to_top_visibility, update_navbar_state,
};

/// Derives the whole scroll-driven UI state from one snapshot.
///
/// Holds only configuration; every call is independent of the previous one.
#[derive(Debug, Clone, Default)]
pub struct ScrollSynchronizer {
    scroll: ScrollConfig,
    parallax: ParallaxConfig,
}

impl ScrollSynchronizer {
    pub fn new(config: &FolioConfig) -> Self {
        Self {
            scroll: config.scroll.clone(),
            parallax: config.parallax.clone(),
        }
    }

    pub fn derive(&self, snapshot: &ScrollSnapshot) -> UiState {
        let scroll_y = snapshot.scroll_y;
        let active_section = update_active_section(scroll_y, &snapshot.sections, &self.scroll);
        // Every link pointing at the winning section lights up, not only the
        // descriptor that won.
        let active_id = active_section
            .and_then(|index| snapshot.sections.get(index))
            .map(|section| section.id.as_str());
        let nav_links = snapshot
            .sections
            .iter()
            .map(|section| NavLinkState {
                link: section.link,
                active: active_id == Some(section.id.as_str()),
            })
            .collect();

        UiState {
            navbar_scrolled: update_navbar_state(scroll_y, &self.scroll),
            active_section,
            nav_links,
            back_to_top_visible: update_back_to_top_visibility(scroll_y, &self.scroll),
            parallax: compute_parallax(scroll_y, snapshot.viewport_height, &self.parallax),
        }
    }
}

/// Coalesces frame requests: at most one callback is queued per frame no
/// matter how many scroll events arrive before it runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame callback.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Call from the frame callback once the work is done.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionDescriptor;

    fn snapshot(scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot::new(
            scroll_y,
            800.0,
            vec![
                SectionDescriptor::new("#hero", 0, 0.0, 700.0),
                // Link 1 points nowhere and has no descriptor.
                SectionDescriptor::new("#about", 2, 700.0, 500.0),
            ],
        )
    }

    #[test]
    fn derives_all_states_from_one_read() {
        let sync = ScrollSynchronizer::default();
        let state = sync.derive(&snapshot(550.0));
        assert!(state.navbar_scrolled);
        assert!(state.back_to_top_visible);
        assert_eq!(state.active_section, Some(1));
        assert_eq!(
            state.nav_links,
            vec![
                NavLinkState {
                    link: 0,
                    active: false
                },
                NavLinkState {
                    link: 2,
                    active: true
                },
            ]
        );
        assert!(state.parallax.is_some());
    }

    #[test]
    fn links_sharing_a_section_are_all_active() {
        let snapshot = ScrollSnapshot::new(
            0.0,
            800.0,
            vec![
                SectionDescriptor::new("#hero", 0, 0.0, 700.0),
                SectionDescriptor::new("#hero", 1, 0.0, 700.0),
                SectionDescriptor::new("#about", 2, 700.0, 500.0),
            ],
        );
        let state = ScrollSynchronizer::default().derive(&snapshot);
        let active: Vec<bool> = state.nav_links.iter().map(|l| l.active).collect();
        assert_eq!(active, vec![true, true, false]);
    }

    #[test]
    fn derivation_is_idempotent() {
        let sync = ScrollSynchronizer::default();
        let a = sync.derive(&snapshot(321.0));
        let b = sync.derive(&snapshot(321.0));
        assert_eq!(a, b);
        assert_eq!(a.commands(), b.commands());
    }

    #[test]
    fn respects_configured_thresholds() {
        let mut config = FolioConfig::default();
        config.scroll.navbar_threshold = 10.0;
        let state = ScrollSynchronizer::new(&config).derive(&snapshot(20.0));
        assert!(state.navbar_scrolled);
        assert!(!state.back_to_top_visible);
    }

    #[test]
    fn frame_gate_coalesces_bursts() {
        let mut gate = FrameGate::default();
        let scheduled = (0..5).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);
        assert!(gate.is_pending());

        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }
}
