//! Scroll-triggered reveal of `[data-aos]` elements.
//!
//! Each element starts hidden and is revealed the first time it is reported
//! as intersecting. Revealing is terminal: nothing puts an element back.

use folio_protocol::{Rect, StyleOp, Target, UiCommand};
use serde::{Deserialize, Serialize};

use crate::config::RevealConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; count],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    /// Hidden style for every tracked element, applied before observing.
    pub fn prepare(&self, config: &RevealConfig) -> Vec<UiCommand> {
        (0..self.states.len())
            .flat_map(|index| {
                let target = Target::Revealable(index);
                [
                    UiCommand::style(target, StyleOp::style("opacity", "0")),
                    UiCommand::style(
                        target,
                        StyleOp::style(
                            "transform",
                            format!("translateY({}px)", config.hidden_offset),
                        ),
                    ),
                    UiCommand::style(
                        target,
                        StyleOp::style("transition", config.transition.clone()),
                    ),
                ]
            })
            .collect()
    }

    /// Feed one observer report. Returns the shown style the first time an
    /// element intersects and `None` for every other report, which also
    /// tells the caller the element no longer needs observing.
    pub fn report(&mut self, index: usize, intersecting: bool) -> Option<Vec<UiCommand>> {
        let state = self.states.get_mut(index)?;
        if !intersecting || *state == RevealState::Revealed {
            return None;
        }
        *state = RevealState::Revealed;
        let target = Target::Revealable(index);
        Some(vec![
            UiCommand::style(target, StyleOp::style("opacity", "1")),
            UiCommand::style(target, StyleOp::style("transform", "translateY(0)")),
        ])
    }
}

/// Observer root margin: the trigger band stops `bottom_margin` above the
/// viewport bottom.
pub fn root_margin(config: &RevealConfig) -> String {
    format!("0px 0px -{}px 0px", config.bottom_margin)
}

/// Fraction of `target` inside `viewport` once the viewport's bottom edge is
/// pulled up by `bottom_margin`.
pub fn visible_fraction(target: &Rect, viewport: &Rect, bottom_margin: f64) -> f64 {
    let area = target.area();
    if area <= 0.0 {
        return 0.0;
    }
    let band = Rect::new(
        viewport.x,
        viewport.y,
        viewport.w,
        (viewport.h - bottom_margin).max(0.0),
    );
    target
        .intersection(&band)
        .map_or(0.0, |overlap| overlap.area() / area)
}

/// Geometric equivalent of the observer trigger, for callers without one.
pub fn reveal_triggered(target: &Rect, viewport: &Rect, config: &RevealConfig) -> bool {
    let fraction = visible_fraction(target, viewport, config.bottom_margin);
    fraction > 0.0 && fraction >= config.threshold
}
