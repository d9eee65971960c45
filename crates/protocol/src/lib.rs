pub mod commands;
pub mod types;

pub use commands::{ScrollBehavior, StyleOp, Target, Token, UiCommand};
pub use types::{Point, Rect};
