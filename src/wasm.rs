//! JavaScript bindings (`wasm` feature).
//!
//! Exposes the planner to a browser page: the page reads the map and
//! request files and hands their contents over as-is.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::error::PlanError;
use crate::fleet::CarrierCountStrategy;
use crate::scheduler::{optimize_delivery, PlannerConfig};

/// Plans with the default fleet heuristic.
///
/// Returns the schedule array, or `{error}` on failure.
#[wasm_bindgen(js_name = optimizeDelivery)]
pub fn optimize_delivery_js(map_csv: JsValue, delivery_request_json: JsValue) -> JsValue {
    plan(&PlannerConfig::default(), map_csv, delivery_request_json)
}

/// Plans with exactly `n_cars` carriers (fewer if there are fewer requests).
#[wasm_bindgen(js_name = optimizeDeliveryWithNCars)]
pub fn optimize_delivery_with_n_cars_js(
    map_csv: JsValue,
    delivery_request_json: JsValue,
    n_cars: usize,
) -> JsValue {
    let config = PlannerConfig::default().with_strategy(CarrierCountStrategy::Fixed(n_cars));
    plan(&config, map_csv, delivery_request_json)
}

fn plan(config: &PlannerConfig, map_csv: JsValue, delivery_request_json: JsValue) -> JsValue {
    let map = match map_csv.as_string() {
        Some(text) => Value::String(text),
        None => return error_object(&PlanError::invalid_input("mapCsv not a string")),
    };
    if !delivery_request_json.is_object() {
        return error_object(&PlanError::invalid_input("deliveryRequestJson not an object"));
    }
    let requests: Value = match serde_wasm_bindgen::from_value(delivery_request_json) {
        Ok(value) => value,
        Err(err) => return error_object(&PlanError::invalid_input(err.to_string())),
    };

    let out = optimize_delivery(config, &map, &requests);
    out.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or_else(|err| error_object(&PlanError::invalid_input(err.to_string())))
}

fn error_object(err: &PlanError) -> JsValue {
    let obj = js_sys::Object::new();
    // Only fails for frozen or proxied targets.
    let _ = js_sys::Reflect::set(&obj, &JsValue::from_str("error"), &JsValue::from_str(&err.to_string()));
    obj.into()
}
