//! Time-driven motion: easing curves, window scroll animation and the keyed
//! task queue the bridge polls once per animation frame.

pub mod easing;
pub mod smooth_scroll;
pub mod tasks;

pub use easing::{CubicBezier, ease_in_out_cubic};
pub use smooth_scroll::{ScrollAnimation, anchor_hash, anchor_scroll_target};
pub use tasks::{Delayed, Task, TaskKey, TaskPoll, TaskQueue};
