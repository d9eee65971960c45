mod dom;
mod providers;
mod runtime;

use folio_core::banner::BANNER;
use folio_core::model::{ParallaxState, ScrollSnapshot, SectionDescriptor, UiState};
use folio_core::scroll::{ScrollSynchronizer, compute_parallax};
use folio_core::{FolioConfig, FolioError, motion};
use folio_protocol::UiCommand;
use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Module entry point: wire the page and greet the console.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = page_config(&document);
    runtime::install(&window, &document, config)?;
    info!("folio ready");

    for line in &BANNER {
        web_sys::console::log_2(
            &JsValue::from_str(&line.format()),
            &JsValue::from_str(line.css),
        );
    }
    Ok(())
}

/// Overrides from `<script id="folio-config" type="application/json">`.
/// A missing element means defaults; a broken one is reported and ignored.
fn page_config(document: &Document) -> FolioConfig {
    let Some(json) = document
        .get_element_by_id("folio-config")
        .and_then(|el| el.text_content())
    else {
        return FolioConfig::default();
    };
    match FolioConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring #folio-config: {e}");
            FolioConfig::default()
        }
    }
}

#[derive(Serialize)]
struct ScrollReport {
    state: UiState,
    commands: Vec<UiCommand>,
}

fn config_or_default(config_json: Option<&str>) -> Result<FolioConfig, FolioError> {
    match config_json {
        Some(json) => Ok(FolioConfig::from_json(json)?),
        None => Ok(FolioConfig::default()),
    }
}

fn scroll_report(
    scroll_y: f64,
    viewport_height: f64,
    sections_json: &str,
    config_json: Option<&str>,
) -> Result<String, FolioError> {
    let config = config_or_default(config_json)?;
    let sections: Vec<SectionDescriptor> = serde_json::from_str(sections_json)?;
    let state = ScrollSynchronizer::new(&config).derive(&ScrollSnapshot::new(
        scroll_y,
        viewport_height,
        sections,
    ));
    let commands = state.commands();
    Ok(serde_json::to_string(&ScrollReport { state, commands })?)
}

fn parallax_report(
    scroll_y: f64,
    viewport_height: f64,
    config_json: Option<&str>,
) -> Result<String, FolioError> {
    let config = config_or_default(config_json)?;
    let state: Option<ParallaxState> =
        compute_parallax(scroll_y, viewport_height, &config.parallax);
    Ok(serde_json::to_string(&state)?)
}

/// Derive the full scroll state for a snapshot, returned as JSON
/// `{ "state": .., "commands": [..] }`.
///
/// `sections_json` is an array of `{ id, link, top, height }`.
#[wasm_bindgen]
pub fn derive_scroll_state(
    scroll_y: f64,
    viewport_height: f64,
    sections_json: &str,
    config_json: Option<String>,
) -> Result<String, JsError> {
    scroll_report(
        scroll_y,
        viewport_height,
        sections_json,
        config_json.as_deref(),
    )
    .map_err(|e| JsError::new(&e.to_string()))
}

/// Hero parallax at an offset as JSON; `null` once past the first viewport.
#[wasm_bindgen]
pub fn parallax_state(
    scroll_y: f64,
    viewport_height: f64,
    config_json: Option<String>,
) -> Result<String, JsError> {
    parallax_report(scroll_y, viewport_height, config_json.as_deref())
        .map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    motion::ease_in_out_cubic(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: &str = r##"[
        { "id": "#hero", "link": 0, "top": 0, "height": 900 },
        { "id": "#expertise", "link": 1, "top": 900, "height": 800 }
    ]"##;

    #[test]
    fn scroll_report_carries_state_and_commands() {
        let json = scroll_report(800.0, 900.0, SECTIONS, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"]["active_section"], 1);
        assert_eq!(value["state"]["navbar_scrolled"], true);
        assert!(value["commands"].as_array().is_some_and(|c| !c.is_empty()));
    }

    #[test]
    fn scroll_report_honours_config_overrides() {
        let config = r#"{ "scroll": { "navbar_threshold": 900 } }"#;
        let json = scroll_report(800.0, 900.0, SECTIONS, Some(config)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"]["navbar_scrolled"], false);
    }

    #[test]
    fn bad_sections_are_json_errors() {
        let err = scroll_report(0.0, 900.0, "{", None).unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = r#"{ "reveal": { "threshold": 2 } }"#;
        let err = parallax_report(0.0, 900.0, Some(config)).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn parallax_report_is_null_past_the_hero() {
        assert_eq!(parallax_report(901.0, 900.0, None).unwrap(), "null");
        let json = parallax_report(0.0, 900.0, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["grid_opacity"], 1.0);
    }
}
