//! WASM bindings for schedule-analyzer.
//!
//! Exposes schedule comparison, conflict detection, common free time, busy
//! blocks and common courses to JavaScript via `wasm-bindgen`, so an HTTP handler can load
//! schedules from its database and call the analyzer directly. All complex
//! types are passed as JSON strings using the analyzer's camelCase field names.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p schedule-analyzer-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/schedule-analyzer-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/schedule_analyzer_wasm.wasm
//! ```

use schedule_analyzer::{AnalyzerOptions, Schedule};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON plumbing (target-independent, so it can be tested natively)
// ---------------------------------------------------------------------------

fn parse_schedules(json: &str) -> Result<Vec<Schedule>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid schedules JSON: {}", e))
}

/// `None` or an empty string means default options.
fn parse_options(json: Option<&str>) -> Result<AnalyzerOptions, String> {
    match json.map(str::trim) {
        None | Some("") => Ok(AnalyzerOptions::default()),
        Some(raw) => serde_json::from_str(raw).map_err(|e| format!("Invalid options JSON: {}", e)),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn compare_json(schedules_json: &str, options_json: Option<&str>) -> Result<String, String> {
    let schedules = parse_schedules(schedules_json)?;
    let options = parse_options(options_json)?;
    let report =
        schedule_analyzer::compare_schedules(&schedules, &options).map_err(|e| e.to_string())?;
    to_json(&report)
}

fn conflicts_json(schedules_json: &str, options_json: Option<&str>) -> Result<String, String> {
    let schedules = parse_schedules(schedules_json)?;
    let options = parse_options(options_json)?;
    let conflicts = schedule_analyzer::find_time_conflicts(&schedules, &options)
        .map_err(|e| e.to_string())?;
    to_json(&conflicts)
}

fn free_time_json(schedules_json: &str, options_json: Option<&str>) -> Result<String, String> {
    let schedules = parse_schedules(schedules_json)?;
    let options = parse_options(options_json)?;
    let free = schedule_analyzer::find_common_free_time(&schedules, &options)
        .map_err(|e| e.to_string())?;
    to_json(&free)
}

fn busy_blocks_json(schedules_json: &str, options_json: Option<&str>) -> Result<String, String> {
    let schedules = parse_schedules(schedules_json)?;
    let options = parse_options(options_json)?;
    let blocks =
        schedule_analyzer::find_busy_blocks(&schedules, &options).map_err(|e| e.to_string())?;
    to_json(&blocks)
}

/// `min_duration_minutes` of `None` falls back to `options.minFreeMinutes`.
fn first_free_slot_json(
    schedules_json: &str,
    options_json: Option<&str>,
    min_duration_minutes: Option<u32>,
) -> Result<String, String> {
    let schedules = parse_schedules(schedules_json)?;
    let options = parse_options(options_json)?;
    let min = min_duration_minutes.unwrap_or(options.min_free_minutes);
    let slot = schedule_analyzer::find_first_common_free_slot(&schedules, &options, min)
        .map_err(|e| e.to_string())?;
    to_json(&slot)
}

fn common_courses_json(schedules_json: &str) -> Result<String, String> {
    let schedules = parse_schedules(schedules_json)?;
    let courses =
        schedule_analyzer::find_common_courses(&schedules).map_err(|e| e.to_string())?;
    to_json(&courses)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compare two or more schedules.
///
/// `schedules_json` is a JSON array of schedules; `options_json` is an
/// optional JSON object with `workDays`, `workHourStart`, `workHourEnd`,
/// `minFreeMinutes`, and `maxTotalSlots` (all optional). Returns the
/// `{commonCourses, timeConflicts, commonFreeTime, statistics}` report as JSON.
#[wasm_bindgen(js_name = "compareSchedules")]
pub fn compare_schedules(schedules_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    compare_json(schedules_json, options_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Find overlapping slots between different schedules.
///
/// Of `options_json`, only `maxTotalSlots` applies here.
#[wasm_bindgen(js_name = "findTimeConflicts")]
pub fn find_time_conflicts(schedules_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    conflicts_json(schedules_json, options_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Find the windows of the work week where every schedule is free.
#[wasm_bindgen(js_name = "findCommonFreeTime")]
pub fn find_common_free_time(schedules_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    free_time_json(schedules_json, options_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Find the earliest common free window of at least `min_duration_minutes`
/// (defaults to the options' `minFreeMinutes`). Returns the slot as JSON, or
/// `null` when no window qualifies.
#[wasm_bindgen(js_name = "findFirstCommonFreeSlot")]
pub fn find_first_common_free_slot(
    schedules_json: &str,
    options_json: Option<String>,
    min_duration_minutes: Option<u32>,
) -> Result<String, JsValue> {
    first_free_slot_json(schedules_json, options_json.as_deref(), min_duration_minutes)
        .map_err(|e| JsValue::from_str(&e))
}

/// Merge all schedules into busy blocks per work day, each with the number of
/// schedules contributing to it.
#[wasm_bindgen(js_name = "findBusyBlocks")]
pub fn find_busy_blocks(schedules_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    busy_blocks_json(schedules_json, options_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Find the course names present in every schedule.
#[wasm_bindgen(js_name = "findCommonCourses")]
pub fn find_common_courses(schedules_json: &str) -> Result<String, JsValue> {
    common_courses_json(schedules_json).map_err(|e| JsValue::from_str(&e))
}
