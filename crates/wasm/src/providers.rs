//! The page's optional JS libraries as effect providers.

use folio_core::effects::{AosConfig, EffectProvider, LightboxConfig, ProviderError, TypedConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = AOS, js_name = init, catch)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;

    type Typed;

    #[wasm_bindgen(constructor, catch)]
    fn new(selector: &str, options: &JsValue) -> Result<Typed, JsValue>;

    #[wasm_bindgen(js_name = GLightbox, catch)]
    fn glightbox(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// `typeof <name> !== 'undefined'` on the global object.
fn global_defined(name: &str) -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// Hand a config to JS as a plain object.
fn to_js<T: Serialize>(name: &'static str, config: &T) -> Result<JsValue, ProviderError> {
    let json = serde_json::to_string(config).map_err(|e| ProviderError::new(name, e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|e| ProviderError::new(name, format!("{e:?}")))
}

fn js_failure(name: &'static str) -> impl Fn(JsValue) -> ProviderError {
    move |e| ProviderError::new(name, format!("{e:?}"))
}

pub struct AosProvider;

impl EffectProvider for AosProvider {
    type Config = AosConfig;

    fn name(&self) -> &'static str {
        "AOS"
    }

    fn is_available(&self) -> bool {
        global_defined("AOS")
    }

    fn init(&self, config: &AosConfig) -> Result<(), ProviderError> {
        aos_init(&to_js(self.name(), config)?).map_err(js_failure(self.name()))
    }
}

/// Typing effect bound to one element selector.
pub struct TypedProvider {
    pub selector: &'static str,
}

impl EffectProvider for TypedProvider {
    type Config = TypedConfig;

    fn name(&self) -> &'static str {
        "Typed"
    }

    fn is_available(&self) -> bool {
        global_defined("Typed")
    }

    fn init(&self, config: &TypedConfig) -> Result<(), ProviderError> {
        // The instance keeps itself alive through its own timers.
        Typed::new(self.selector, &to_js(self.name(), config)?)
            .map(drop)
            .map_err(js_failure(self.name()))
    }
}

pub struct LightboxProvider;

impl EffectProvider for LightboxProvider {
    type Config = LightboxConfig;

    fn name(&self) -> &'static str {
        "GLightbox"
    }

    fn is_available(&self) -> bool {
        global_defined("GLightbox")
    }

    fn init(&self, config: &LightboxConfig) -> Result<(), ProviderError> {
        glightbox(&to_js(self.name(), config)?)
            .map(drop)
            .map_err(js_failure(self.name()))
    }
}
