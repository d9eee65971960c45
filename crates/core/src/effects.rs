//! Third-party page effects behind a provider interface.
//!
//! The page optionally loads an animate-on-scroll library, a typing effect and
//! a lightbox. Each is reached only through [`EffectProvider`] with a fixed
//! configuration contract; any library honouring the contract can stand in.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::motion::CubicBezier;

#[derive(Debug, Error)]
#[error("{name}: {message}")]
pub struct ProviderError {
    pub name: &'static str,
    pub message: String,
}

impl ProviderError {
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }
}

pub trait EffectProvider {
    type Config: Serialize;

    /// Name used in logs, e.g. the global the library installs.
    fn name(&self) -> &'static str;

    /// Whether the library is loaded on this page.
    fn is_available(&self) -> bool;

    fn init(&self, config: &Self::Config) -> Result<(), ProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    Initialized,
    Unavailable,
}

/// Initialize `provider` if its library is present. A missing library is a
/// normal condition, not an error.
pub fn init_effect<P: EffectProvider>(
    provider: &P,
    config: &P::Config,
) -> Result<EffectOutcome, ProviderError> {
    if !provider.is_available() {
        debug!("{} not loaded, skipping", provider.name());
        return Ok(EffectOutcome::Unavailable);
    }
    provider.init(config)?;
    debug!("{} initialized", provider.name());
    Ok(EffectOutcome::Initialized)
}

/// Animate-on-scroll options, serialized the way the library reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AosConfig {
    pub duration: u32,
    pub easing: String,
    pub once: bool,
    pub offset: u32,
    pub delay: u32,
    pub anchor_placement: String,
    pub mirror: bool,
    pub disable: String,
}

impl Default for AosConfig {
    fn default() -> Self {
        Self {
            duration: 900,
            easing: CubicBezier::SOFT.to_string(),
            once: true,
            offset: 120,
            delay: 50,
            anchor_placement: "top-bottom".to_string(),
            mirror: false,
            disable: "mobile".to_string(),
        }
    }
}

/// Typing-effect timing; the strings come from the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypedOptions {
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl Default for TypedOptions {
    fn default() -> Self {
        Self {
            type_speed: 80,
            back_speed: 50,
            back_delay: 2000,
            looped: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedConfig {
    pub strings: Vec<String>,
    #[serde(flatten)]
    pub options: TypedOptions,
}

impl TypedConfig {
    /// Build from the `data-typed-items` attribute: comma separated, taken
    /// verbatim. `None` when the attribute is missing or empty.
    pub fn from_items(items: Option<&str>, options: &TypedOptions) -> Option<Self> {
        let items = items.filter(|s| !s.is_empty())?;
        Some(Self {
            strings: items.split(',').map(str::to_string).collect(),
            options: options.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub selector: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            selector: ".portfolio-lightbox".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeProvider {
        available: bool,
        fail: bool,
        seen: RefCell<Vec<String>>,
    }

    impl FakeProvider {
        fn new(available: bool, fail: bool) -> Self {
            Self {
                available,
                fail,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl EffectProvider for FakeProvider {
        type Config = LightboxConfig;

        fn name(&self) -> &'static str {
            "FakeLightbox"
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn init(&self, config: &LightboxConfig) -> Result<(), ProviderError> {
            if self.fail {
                return Err(ProviderError::new(self.name(), "boom"));
            }
            self.seen.borrow_mut().push(config.selector.clone());
            Ok(())
        }
    }

    #[test]
    fn missing_library_is_skipped() {
        let provider = FakeProvider::new(false, false);
        let outcome = init_effect(&provider, &LightboxConfig::default());
        assert!(matches!(outcome, Ok(EffectOutcome::Unavailable)));
        assert!(provider.seen.borrow().is_empty());
    }

    #[test]
    fn available_library_receives_config() {
        let provider = FakeProvider::new(true, false);
        let outcome = init_effect(&provider, &LightboxConfig::default());
        assert!(matches!(outcome, Ok(EffectOutcome::Initialized)));
        assert_eq!(*provider.seen.borrow(), vec![".portfolio-lightbox"]);
    }

    #[test]
    fn init_failure_propagates() {
        let provider = FakeProvider::new(true, true);
        let err = init_effect(&provider, &LightboxConfig::default());
        assert!(matches!(err, Err(ProviderError { name: "FakeLightbox", .. })));
    }

    #[test]
    fn aos_options_use_library_field_names() {
        let json = serde_json::to_value(AosConfig::default()).expect("aos config serializes");
        assert_eq!(json["anchorPlacement"], "top-bottom");
        assert_eq!(json["easing"], "cubic-bezier(0.28, 0.11, 0.32, 1)");
        assert_eq!(json["duration"], 900);
        assert_eq!(json["disable"], "mobile");
    }

    #[test]
    fn typed_items_split_verbatim() {
        let cfg = TypedConfig::from_items(Some("Engineer, Designer,Writer"), &TypedOptions::default());
        let cfg = cfg.expect("items present");
        assert_eq!(cfg.strings, vec!["Engineer", " Designer", "Writer"]);

        let json = serde_json::to_value(&cfg).expect("typed config serializes");
        assert_eq!(json["typeSpeed"], 80);
        assert_eq!(json["backDelay"], 2000);
        assert_eq!(json["loop"], true);
    }

    #[test]
    fn typed_needs_items() {
        assert_eq!(TypedConfig::from_items(None, &TypedOptions::default()), None);
        assert_eq!(TypedConfig::from_items(Some(""), &TypedOptions::default()), None);
    }
}
