//! WASM bindings for frontend decision replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{describe_hunter, detect_cycle, execute_hunter, registry};
use crate::{Classifier, DetectorConfig, History, HunterKind};

fn parse_history(label: &str, history: &str) -> Result<History, JsError> {
    history
        .parse::<History>()
        .map_err(|e| JsError::new(&format!("Invalid {} history: {}", label, e)))
}

/// Decide the hunter's next move
///
/// # Arguments
/// * `hunter` - Hunter identifier (`CycleHunter`) or display name (`Cycle Hunter`)
/// * `own` - The hunter's own moves as a compact string, e.g. `"CCDC"`
/// * `opponent` - The opponent's moves in the same format
///
/// # Returns
/// `"C"` or `"D"`
#[wasm_bindgen]
pub fn hunter_decide(hunter: &str, own: &str, opponent: &str) -> Result<String, JsError> {
    hunter_decide_with_config(hunter, own, opponent, "{}")
}

/// Same as `hunter_decide`, with threshold overrides as a JSON object
#[wasm_bindgen]
pub fn hunter_decide_with_config(
    hunter: &str,
    own: &str,
    opponent: &str,
    config_json: &str,
) -> Result<String, JsError> {
    let kind: HunterKind = hunter
        .parse()
        .map_err(|e| JsError::new(&format!("{}", e)))?;
    let own = parse_history("own", own)?;
    let opponent = parse_history("opponent", opponent)?;
    let config = DetectorConfig::from_json(config_json)
        .map_err(|e| JsError::new(&format!("{}", e)))?;

    Ok(execute_hunter(kind, &own, &opponent, &config).to_string())
}

#[derive(serde::Serialize)]
struct HunterInfo {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    classifier: Classifier,
}

/// Get all available hunters with their classifier metadata
#[wasm_bindgen]
pub fn get_hunter_types() -> Result<JsValue, JsError> {
    let types: Vec<HunterInfo> = registry()
        .into_iter()
        .map(|entry| HunterInfo {
            id: entry.kind.id(),
            name: entry.name,
            description: describe_hunter(entry.kind),
            classifier: entry.classifier,
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Minimal period (two or more) of an opponent history, if it is periodic
#[wasm_bindgen]
pub fn detect_opponent_cycle(history: &str) -> Result<Option<u32>, JsError> {
    let history = parse_history("opponent", history)?;
    Ok(detect_cycle(history.moves()).map(|period| period as u32))
}
