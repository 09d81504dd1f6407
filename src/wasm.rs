//! Browser bindings
//!
//! The UI hands raw JSON across; these entry points return the validated
//! value re-encoded, or throw the contract error as a string.

use wasm_bindgen::prelude::*;

use crate::codec;
use crate::schema::SimulationKind;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by the host page
        return;
    }
    log::info!("sim-contract ready");
}

fn parse_kind(kind: &str) -> Result<SimulationKind, JsValue> {
    SimulationKind::from_str(kind).ok_or_else(|| JsValue::from_str(&format!("unknown simulation kind {kind:?}")))
}

fn to_js(err: crate::ContractError) -> JsValue {
    JsValue::from_str(&format!("{}: {}", err.code(), err))
}

#[wasm_bindgen(js_name = validateFrame)]
pub fn validate_frame(kind: &str, json: &str) -> Result<String, JsValue> {
    let kind = parse_kind(kind)?;
    let frame = codec::decode_frame(kind, json).map_err(to_js)?;
    codec::encode(&frame).map_err(to_js)
}

#[wasm_bindgen(js_name = validateSettings)]
pub fn validate_settings(kind: &str, json: &str) -> Result<String, JsValue> {
    let kind = parse_kind(kind)?;
    let settings = codec::decode_settings(kind, json).map_err(to_js)?;
    codec::encode(&settings).map_err(to_js)
}
