//! Pure page-interaction logic for folio.
//!
//! Every function in this crate reads plain values (scroll offsets, layout
//! rects, pointer positions) and answers with [`UiCommand`]s. Nothing here
//! touches the DOM; the wasm bridge resolves elements and applies commands.
//!
//! [`UiCommand`]: folio_protocol::UiCommand

pub mod banner;
pub mod config;
pub mod effects;
pub mod entrance;
pub mod error;
pub mod filter;
pub mod model;
pub mod motion;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod scroll;

pub use config::FolioConfig;
pub use error::FolioError;
