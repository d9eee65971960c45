pub mod layout;
pub mod state;

pub use layout::{PageLayout, ScrollSnapshot, SectionDescriptor};
pub use state::{NavLinkState, ParallaxState, UiState};
