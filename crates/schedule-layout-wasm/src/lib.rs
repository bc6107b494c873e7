//! WASM bindings for schedule-layout.
//!
//! Exposes day layout, time projection and the visual-row grid to the browser
//! front end via `wasm-bindgen`. Events, configuration and results cross the
//! boundary as JSON strings using the same camelCase field names the front end
//! stores.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p schedule-layout-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/schedule_layout_wasm.wasm
//! ```

use schedule_layout::projection::clock_duration_to_height;
use schedule_layout::{Event, ScheduleConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON in, JSON out
// ---------------------------------------------------------------------------

/// Parse and validate a display configuration. An empty string selects the defaults.
fn parse_config_json(json: &str) -> Result<ScheduleConfig, JsValue> {
    let config: ScheduleConfig = if json.trim().is_empty() {
        ScheduleConfig::default()
    } else {
        serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {}", e)))?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out one day's events.
///
/// `events_json` is an array of `{id, startTime, endTime, type,
/// preparationTime, travelTime}` objects. Returns `{blocks, rejected}` where
/// each block carries `eventId`, `kind`, `top`, `height`, `left`, `width`,
/// `columnIndex` and `columnCount`.
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day(events_json: &str, config_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let config = parse_config_json(config_json)?;

    to_json(&schedule_layout::layout_day(&events, &config))
}

/// Vertical pixel offset of an `HH:MM` time, or `undefined` when the time is
/// malformed or outside the visible window.
#[wasm_bindgen(js_name = "timeToPosition")]
pub fn time_to_position(time: &str, config_json: &str) -> Result<Option<f64>, JsValue> {
    let config = parse_config_json(config_json)?;
    Ok(schedule_layout::time_to_position(time, &config))
}

/// Pixel height of the visible part of `start..end`, or `undefined` for a
/// malformed time.
#[wasm_bindgen(js_name = "durationToHeight")]
pub fn duration_to_height(
    start: &str,
    end: &str,
    config_json: &str,
) -> Result<Option<f64>, JsValue> {
    let config = parse_config_json(config_json)?;
    Ok(clock_duration_to_height(start, end, &config))
}

/// The grid rows top to bottom as a JSON array of
/// `{kind: "hour", hour}` / `{kind: "caption", hour, period}` objects.
#[wasm_bindgen(js_name = "visualRows")]
pub fn visual_rows(config_json: &str) -> Result<String, JsValue> {
    let config = parse_config_json(config_json)?;
    to_json(&config.visual_rows())
}

/// Pixels per hour for the available grid height, clamped to 40..=120.
#[wasm_bindgen(js_name = "fitPixelsPerHour")]
pub fn fit_pixels_per_hour(available_height: f64, row_count: usize) -> f64 {
    schedule_layout::fit_pixels_per_hour(available_height, row_count)
}
