use folio_core::FolioConfig;
use folio_core::model::{PageLayout, UiState};
use folio_core::scroll::ScrollSynchronizer;
use folio_protocol::UiCommand;
use serde::Serialize;

/// What the page would show at one scroll offset.
#[derive(Debug, Serialize)]
pub struct Frame {
    pub scroll_y: f64,
    /// Hash of the active section.
    pub active: Option<String>,
    pub state: UiState,
    pub commands: Vec<UiCommand>,
}

pub const MAX_SWEEP_OFFSETS: u32 = 10_000;

pub fn replay(layout: &PageLayout, config: &FolioConfig, offsets: &[f64]) -> Vec<Frame> {
    let sync = ScrollSynchronizer::new(config);
    offsets
        .iter()
        .map(|&scroll_y| {
            let snapshot = layout.snapshot(scroll_y);
            let state = sync.derive(&snapshot);
            let active = state
                .active_section
                .and_then(|i| snapshot.sections.get(i))
                .map(|section| section.id.clone());
            let commands = state.commands();
            Frame {
                scroll_y,
                active,
                state,
                commands,
            }
        })
        .collect()
}

/// Offsets from the top to the layout's last scroll position, `step` apart.
/// The last position is always included. Steps too small for the page are
/// widened so a sweep never exceeds [`MAX_SWEEP_OFFSETS`] positions.
pub fn sweep(layout: &PageLayout, step: f64) -> Vec<f64> {
    let end = layout.max_scroll();
    if !step.is_finite() || step <= 0.0 {
        return vec![0.0];
    }
    let step = step.max(end / f64::from(MAX_SWEEP_OFFSETS));
    let mut offsets: Vec<f64> = (0..MAX_SWEEP_OFFSETS)
        .map(|i| f64::from(i) * step)
        .take_while(|&y| y < end)
        .collect();
    offsets.push(end);
    offsets
}

#[cfg(test)]
mod tests {
    use folio_core::model::SectionDescriptor;

    use super::*;

    fn layout() -> PageLayout {
        PageLayout {
            viewport_height: 800.0,
            sections: vec![
                SectionDescriptor::new("#hero", 0, 0.0, 800.0),
                SectionDescriptor::new("#projects", 1, 800.0, 1000.0),
            ],
        }
    }

    #[test]
    fn replay_names_the_active_section() {
        let frames = replay(&layout(), &FolioConfig::default(), &[0.0, 700.0]);
        let active: Vec<_> = frames.iter().map(|f| f.active.as_deref()).collect();
        assert_eq!(active, vec![Some("#hero"), Some("#projects")]);
        assert!(frames[1].state.navbar_scrolled);
        assert!(frames[1].state.parallax.is_some());
    }

    #[test]
    fn sweep_ends_at_the_last_scroll_position() {
        assert_eq!(sweep(&layout(), 400.0), vec![0.0, 400.0, 800.0, 1000.0]);
        assert_eq!(sweep(&layout(), 500.0), vec![0.0, 500.0, 1000.0]);
    }

    #[test]
    fn tiny_steps_are_widened() {
        let offsets = sweep(&layout(), 1e-9);
        assert!(offsets.len() <= MAX_SWEEP_OFFSETS as usize + 1);
        assert_eq!(offsets.first(), Some(&0.0));
        assert_eq!(offsets.last(), Some(&1000.0));
    }

    #[test]
    fn sweep_with_no_step_stays_at_the_top() {
        assert_eq!(sweep(&layout(), 0.0), vec![0.0]);
        assert_eq!(sweep(&PageLayout::default(), 100.0), vec![0.0]);
    }
}
