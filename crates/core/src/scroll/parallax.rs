use crate::config::ParallaxConfig;
use crate::model::ParallaxState;

/// Hero parallax for the current offset.
///
/// Returns `None` once the offset is past the first viewport: the decorations
/// keep whatever was last applied instead of being recomputed. At exactly one
/// viewport the values are still produced (grid opacity `1 - grid_fade`).
///
/// Opacities are not clamped unless `clamp_opacity` is set; the indicator
/// goes negative past its fade distance and the browser treats that as 0.
pub fn compute_parallax(
    scroll_y: f64,
    viewport_height: f64,
    config: &ParallaxConfig,
) -> Option<ParallaxState> {
    if viewport_height <= 0.0 || scroll_y > viewport_height {
        return None;
    }

    let mut grid_opacity = 1.0 - (scroll_y / viewport_height) * config.grid_fade;
    let mut indicator_opacity = 1.0 - scroll_y / config.indicator_fade_distance;
    if config.clamp_opacity {
        grid_opacity = grid_opacity.clamp(0.0, 1.0);
        indicator_opacity = indicator_opacity.clamp(0.0, 1.0);
    }

    Some(ParallaxState {
        grid_translate_y: scroll_y * config.grid_speed,
        grid_opacity,
        indicator_translate_y: scroll_y * config.indicator_speed,
        indicator_opacity,
    })
}
