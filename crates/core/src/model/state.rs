use folio_protocol::{StyleOp, Target, UiCommand};
use serde::{Deserialize, Serialize};

/// Whether one nav link currently marks the visible section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLinkState {
    pub link: usize,
    pub active: bool,
}

/// Hero decoration offsets for the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxState {
    pub grid_translate_y: f64,
    pub grid_opacity: f64,
    pub indicator_translate_y: f64,
    pub indicator_opacity: f64,
}

impl ParallaxState {
    pub fn commands(&self) -> Vec<UiCommand> {
        vec![
            UiCommand::style(
                Target::DecorativeGrid,
                StyleOp::style("transform", format!("translateY({}px)", self.grid_translate_y)),
            ),
            UiCommand::style(
                Target::DecorativeGrid,
                StyleOp::style("opacity", self.grid_opacity.to_string()),
            ),
            UiCommand::style(
                Target::ScrollIndicator,
                StyleOp::style("opacity", self.indicator_opacity.to_string()),
            ),
            // The indicator is centred with translateX(-50%); keep it.
            UiCommand::style(
                Target::ScrollIndicator,
                StyleOp::style(
                    "transform",
                    format!("translateX(-50%) translateY({}px)", self.indicator_translate_y),
                ),
            ),
        ]
    }
}

/// Every scroll-derived visual state of the page at one offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub navbar_scrolled: bool,
    /// Index into the snapshot's sections.
    pub active_section: Option<usize>,
    pub nav_links: Vec<NavLinkState>,
    pub back_to_top_visible: bool,
    /// `None` once the hero has scrolled out; the last applied values stay.
    pub parallax: Option<ParallaxState>,
}

impl UiState {
    /// Commands recomputed on every scroll and on load.
    pub fn scroll_commands(&self) -> Vec<UiCommand> {
        let mut commands = Vec::with_capacity(self.nav_links.len() + 2);
        commands.push(UiCommand::style(
            Target::Navbar,
            StyleOp::set_class("scrolled", self.navbar_scrolled),
        ));
        for link in &self.nav_links {
            commands.push(UiCommand::style(
                Target::NavLink(link.link),
                StyleOp::set_class("active", link.active),
            ));
        }
        commands.push(UiCommand::style(
            Target::BackToTop,
            StyleOp::set_class("active", self.back_to_top_visible),
        ));
        commands
    }

    /// Commands applied once per animation frame.
    pub fn parallax_commands(&self) -> Vec<UiCommand> {
        self.parallax
            .as_ref()
            .map(ParallaxState::commands)
            .unwrap_or_default()
    }

    pub fn commands(&self) -> Vec<UiCommand> {
        let mut commands = self.scroll_commands();
        commands.extend(self.parallax_commands());
        commands
    }
}
