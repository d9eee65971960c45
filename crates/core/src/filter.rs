use folio_protocol::{StyleOp, Target, UiCommand};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("filter button has no data-filter value")]
    Missing,
    #[error("empty filter selector {0:?}")]
    Empty(String),
}

/// A project filter taken from a button's `data-filter` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    /// Cards carrying this class.
    Class(String),
}

impl Filter {
    /// `*` selects everything; `.web` (or bare `web`) selects a class.
    pub fn parse(value: Option<&str>) -> Result<Self, FilterError> {
        let value = value.ok_or(FilterError::Missing)?.trim();
        if value == "*" {
            return Ok(Self::All);
        }
        let class = value.strip_prefix('.').unwrap_or(value);
        if class.is_empty() {
            return Err(FilterError::Empty(value.to_string()));
        }
        Ok(Self::Class(class.to_string()))
    }

    pub fn matches<S: AsRef<str>>(&self, card_classes: &[S]) -> bool {
        match self {
            Self::All => true,
            Self::Class(class) => card_classes.iter().any(|c| c.as_ref() == class),
        }
    }
}

/// Commands for a click on filter button `clicked`.
///
/// Exactly the clicked button ends up `active`; matching cards lose `hidden`,
/// the rest gain it. `cards` holds each card's class list in document order.
pub fn apply_filter<S: AsRef<str>>(
    filter: &Filter,
    clicked: usize,
    button_count: usize,
    cards: &[Vec<S>],
) -> Vec<UiCommand> {
    let buttons = (0..button_count).map(|index| {
        UiCommand::style(
            Target::FilterButton(index),
            StyleOp::set_class("active", index == clicked),
        )
    });
    let cards = cards.iter().enumerate().map(|(index, classes)| {
        UiCommand::style(
            Target::ProjectCard(index),
            StyleOp::set_class("hidden", !filter.matches(classes)),
        )
    });
    buttons.chain(cards).collect()
}
