#![cfg(target_arch = "wasm32")]

use tailmerge_wasm::TwMerge;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn to_js(value: serde_json::Value) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).unwrap()
}

#[wasm_bindgen_test]
fn test_merge_string() {
    let tw = TwMerge::new(JsValue::UNDEFINED).map_err(JsValue::from).unwrap();
    let merged = tw.merge(JsValue::from_str("px-2 py-1 p-3")).map_err(JsValue::from).unwrap();
    assert_eq!(merged, "p-3");
}

#[wasm_bindgen_test]
fn test_merge_nested_value() {
    let tw = TwMerge::new(JsValue::NULL).map_err(JsValue::from).unwrap();
    let value = to_js(serde_json::json!([
        "p-2",
        ["hover:p-4"],
        { "p-4": true, "m-2": false }
    ]));
    assert_eq!(tw.merge(value).map_err(JsValue::from).unwrap(), "hover:p-4 p-4");
}

#[wasm_bindgen_test]
fn test_modify() {
    let tw = TwMerge::new(JsValue::UNDEFINED).map_err(JsValue::from).unwrap();
    assert_eq!(tw.modify("hover", "p-2 p-4"), "hover:p-4");
}

#[wasm_bindgen_test]
fn test_invalid_options() {
    let options = to_js(serde_json::json!({ "cache": "yes" }));
    assert!(TwMerge::new(options).is_err());
}

#[wasm_bindgen_test]
fn test_merge_truthy_conditions() {
    let tw = TwMerge::new(JsValue::UNDEFINED).map_err(JsValue::from).unwrap();
    let value = to_js(serde_json::json!({ "p-2": 1, "p-4": null, "m-2": "" }));
    assert_eq!(tw.merge(value).map_err(JsValue::from).unwrap(), "p-2");
}
