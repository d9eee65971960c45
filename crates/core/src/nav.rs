use folio_protocol::{StyleOp, Target, UiCommand};

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer from the hamburger toggle.
    pub fn toggle(&mut self) -> Vec<UiCommand> {
        self.open = !self.open;
        self.commands()
    }

    /// Close the drawer after a nav link is followed. Nothing to do when it
    /// is already closed.
    pub fn close(&mut self) -> Vec<UiCommand> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        self.commands()
    }

    fn commands(&self) -> Vec<UiCommand> {
        vec![
            UiCommand::style(Target::NavMenu, StyleOp::set_class("active", self.open)),
            UiCommand::style(
                Target::Body,
                StyleOp::set_class("mobile-nav-active", self.open),
            ),
            UiCommand::style(
                Target::MobileToggleIcon,
                StyleOp::set_class("bi-list", !self.open),
            ),
            UiCommand::style(Target::MobileToggleIcon, StyleOp::set_class("bi-x", self.open)),
        ]
    }
}
