use std::fmt;

use serde::{Deserialize, Serialize};

/// Cubic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A CSS `cubic-bezier()` timing function, handed to the browser as text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// The soft deceleration curve used by every entrance transition.
    pub const SOFT: CubicBezier = CubicBezier::new(0.28, 0.11, 0.32, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
    }

    #[test]
    fn soft_curve_css() {
        assert_eq!(
            CubicBezier::SOFT.to_string(),
            "cubic-bezier(0.28, 0.11, 0.32, 1)"
        );
    }

    proptest! {
        #[test]
        fn easing_is_monotonic_and_bounded(a in 0.0..=1.0f64, b in 0.0..=1.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (elo, ehi) = (ease_in_out_cubic(lo), ease_in_out_cubic(hi));
            prop_assert!(elo <= ehi + 1e-12);
            prop_assert!((0.0..=1.0).contains(&elo));
            prop_assert!((0.0..=1.0).contains(&ehi));
        }

        #[test]
        fn easing_is_symmetric(t in 0.0..=1.0f64) {
            let mirrored = 1.0 - ease_in_out_cubic(1.0 - t);
            prop_assert!((ease_in_out_cubic(t) - mirrored).abs() < 1e-9);
        }
    }
}
