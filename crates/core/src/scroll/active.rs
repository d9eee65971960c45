use crate::config::ScrollConfig;
use crate::model::SectionDescriptor;

/// Locate the section that should mark its nav link active.
///
/// The scroll offset is biased by the configured lookahead so a section lights
/// up a little before its top reaches the viewport top. Sections are checked
/// in order and the last one whose `[top, top + height)` contains the biased
/// position wins; with non-overlapping sections at most one can match.
pub fn update_active_section(
    scroll_y: f64,
    sections: &[SectionDescriptor],
    config: &ScrollConfig,
) -> Option<usize> {
    let position = scroll_y + config.section_lookahead;
    sections
        .iter()
        .rposition(|section| section.contains(position))
}
