use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Class names, CSS property names and similar identifiers. Almost always
/// static, owned only when they come from page data or deserialization.
pub type Token = Cow<'static, str>;

/// A page element a command is addressed to.
///
/// Indexed variants refer to the position of the element in the document-order
/// list the bridge resolved at startup (e.g. the third `.nav-link`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Navbar,
    NavMenu,
    Body,
    MobileToggleIcon,
    NavLink(usize),
    BackToTop,
    DecorativeGrid,
    ScrollIndicator,
    FilterButton(usize),
    ProjectCard(usize),
    Revealable(usize),
    HeroPart(usize),
}

/// A single class or inline-style mutation on one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleOp {
    /// Add (`enabled`) or remove a class.
    SetClass { class: Token, enabled: bool },
    /// Set an inline style property.
    SetStyle { property: Token, value: String },
}

impl StyleOp {
    pub fn add_class(class: impl Into<Token>) -> Self {
        Self::SetClass {
            class: class.into(),
            enabled: true,
        }
    }

    pub fn remove_class(class: impl Into<Token>) -> Self {
        Self::SetClass {
            class: class.into(),
            enabled: false,
        }
    }

    pub fn set_class(class: impl Into<Token>, enabled: bool) -> Self {
        Self::SetClass {
            class: class.into(),
            enabled,
        }
    }

    pub fn style(property: impl Into<Token>, value: impl Into<String>) -> Self {
        Self::SetStyle {
            property: property.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    /// Jump immediately; used for per-frame animation samples.
    Instant,
    /// Let the browser animate the scroll.
    Smooth,
}

/// A single, stateless UI instruction.
///
/// The core emits a `Vec<UiCommand>` for each derivation. The bridge applies
/// them in order; each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiCommand {
    Style { target: Target, op: StyleOp },
    ScrollTo { top: f64, behavior: ScrollBehavior },
}

impl UiCommand {
    pub fn style(target: Target, op: StyleOp) -> Self {
        Self::Style { target, op }
    }

    pub fn scroll_to(top: f64, behavior: ScrollBehavior) -> Self {
        Self::ScrollTo { top, behavior }
    }

    /// The element this command mutates, if any.
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::Style { target, .. } => Some(*target),
            Self::ScrollTo { .. } => None,
        }
    }
}
