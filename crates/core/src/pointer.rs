//! Decorative pointer effects: card tilt and magnetic buttons.
//!
//! Pointer positions and rects are both in viewport (client) coordinates.

use folio_protocol::{Point, Rect, StyleOp};

use crate::config::PointerConfig;

/// Rotation of a card leaning towards the pointer, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(rect: &Rect, pointer: Point, config: &PointerConfig) -> Self {
        let x = pointer.x - rect.x;
        let y = pointer.y - rect.y;
        let center_x = rect.w / 2.0;
        let center_y = rect.h / 2.0;
        Self {
            rotate_x: (y - center_y) / config.tilt_divisor,
            rotate_y: (center_x - x) / config.tilt_divisor,
        }
    }

    pub fn style(&self, config: &PointerConfig) -> StyleOp {
        StyleOp::style(
            "transform",
            format!(
                "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-{}px) scale({})",
                self.rotate_x, self.rotate_y, config.tilt_lift, config.tilt_scale
            ),
        )
    }

    pub fn reset() -> StyleOp {
        StyleOp::style(
            "transform",
            "perspective(1000px) rotateX(0) rotateY(0) translateY(0) scale(1)",
        )
    }
}

/// Offset of a button pulled towards the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnet {
    pub dx: f64,
    pub dy: f64,
}

impl Magnet {
    pub fn from_pointer(rect: &Rect, pointer: Point, config: &PointerConfig) -> Self {
        let center = rect.center();
        Self {
            dx: (pointer.x - center.x) * config.magnetic_strength,
            dy: (pointer.y - center.y) * config.magnetic_strength,
        }
    }

    pub fn style(&self, config: &PointerConfig) -> StyleOp {
        StyleOp::style(
            "transform",
            format!(
                "translate({}px, {}px) scale({})",
                self.dx, self.dy, config.magnetic_scale
            ),
        )
    }

    pub fn reset() -> StyleOp {
        StyleOp::style("transform", "translate(0, 0) scale(1)")
    }
}
