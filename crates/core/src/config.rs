//! Page tuning knobs.
//!
//! Every field has a default matching the shipped page, so a page config only
//! needs to name what it overrides:
//!
//! ```json
//! { "scroll": { "navbar_threshold": 60 }, "parallax": { "clamp_opacity": true } }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::effects::{AosConfig, LightboxConfig, TypedOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub scroll: ScrollConfig,
    pub parallax: ParallaxConfig,
    pub anchor: AnchorConfig,
    pub reveal: RevealConfig,
    pub entrance: EntranceConfig,
    pub pointer: PointerConfig,
    pub aos: AosConfig,
    pub typed: TypedOptions,
    pub lightbox: LightboxConfig,
}

impl FolioConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("scroll.navbar_threshold", self.scroll.navbar_threshold)?;
        non_negative(
            "scroll.back_to_top_threshold",
            self.scroll.back_to_top_threshold,
        )?;
        non_negative("scroll.section_lookahead", self.scroll.section_lookahead)?;
        positive(
            "parallax.indicator_fade_distance",
            self.parallax.indicator_fade_distance,
        )?;
        positive("anchor.duration_ms", self.anchor.duration_ms)?;
        non_negative("reveal.bottom_margin", self.reveal.bottom_margin)?;
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid {
                field: "reveal.threshold",
                reason: format!("must be within [0, 1], got {}", self.reveal.threshold),
            });
        }
        positive("pointer.tilt_divisor", self.pointer.tilt_divisor)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a non-negative number, got {value}"),
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Navbar gets `scrolled` strictly above this offset.
    pub navbar_threshold: f64,
    /// Back-to-top control shows strictly above this offset.
    pub back_to_top_threshold: f64,
    /// Added to the scroll offset before locating the active section.
    pub section_lookahead: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 100.0,
            back_to_top_threshold: 300.0,
            section_lookahead: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub grid_speed: f64,
    /// Opacity lost by the grid over one full viewport of scrolling.
    pub grid_fade: f64,
    pub indicator_speed: f64,
    /// Scroll distance over which the indicator fades out completely.
    pub indicator_fade_distance: f64,
    /// Clamp derived opacities to `[0, 1]`. Off by default: the page has always
    /// written the raw values and lets the browser clamp them.
    pub clamp_opacity: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            grid_speed: 0.3,
            grid_fade: 0.5,
            indicator_speed: 0.5,
            indicator_fade_distance: 500.0,
            clamp_opacity: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Clearance kept above a scrolled-to section for the fixed header.
    pub header_offset: f64,
    pub duration_ms: f64,
    /// Section the scroll indicator jumps to.
    pub indicator_target: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            duration_ms: 800.0,
            indicator_target: "#expertise".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction of the element that triggers the reveal.
    pub threshold: f64,
    /// The trigger band ends this far above the viewport bottom.
    pub bottom_margin: f64,
    /// Downward offset of a hidden element.
    pub hidden_offset: f64,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
            hidden_offset: 30.0,
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    pub body_fade_delay_ms: f64,
    pub hero_base_delay_ms: f64,
    pub hero_step_ms: f64,
    pub hero_offset: f64,
    /// Hero parts in stagger order.
    pub hero_parts: Vec<String>,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            body_fade_delay_ms: 50.0,
            hero_base_delay_ms: 100.0,
            hero_step_ms: 150.0,
            hero_offset: 30.0,
            hero_parts: [
                ".hero-greeting",
                ".hero-main",
                ".hero-subtitle",
                ".hero-cta",
                ".hero-social",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Pointer distance from the card centre per degree of rotation.
    pub tilt_divisor: f64,
    pub tilt_lift: f64,
    pub tilt_scale: f64,
    pub magnetic_strength: f64,
    pub magnetic_scale: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            tilt_divisor: 30.0,
            tilt_lift: 8.0,
            tilt_scale: 1.01,
            magnetic_strength: 0.15,
            magnetic_scale: 1.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = FolioConfig::from_json("{}").expect("empty config parses");
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = FolioConfig::from_json(
            r#"{ "scroll": { "navbar_threshold": 60 }, "parallax": { "clamp_opacity": true } }"#,
        )
        .expect("partial config parses");
        assert!((config.scroll.navbar_threshold - 60.0).abs() < f64::EPSILON);
        assert!((config.scroll.back_to_top_threshold - 300.0).abs() < f64::EPSILON);
        assert!(config.parallax.clamp_opacity);
        assert_eq!(config.anchor.indicator_target, "#expertise");
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = FolioConfig::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#);
        assert!(matches!(
            err,
            Err(ConfigError::Invalid {
                field: "reveal.threshold",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_duration() {
        let err = FolioConfig::from_json(r#"{ "anchor": { "duration_ms": 0 } }"#);
        assert!(matches!(
            err,
            Err(ConfigError::Invalid {
                field: "anchor.duration_ms",
                ..
            })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            FolioConfig::from_json("{ scroll"),
            Err(ConfigError::Parse(_))
        ));
    }
}
