//! Host-surface tests; run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use js_sys::{BigInt as JsBigInt, Reflect};
use lagrange_share_wasm::{decode_based, encode_based, solve_dataset};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const SAMPLE: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

#[wasm_bindgen_test]
fn solves_sample_document() {
    let solution = solve_dataset(SAMPLE).unwrap();
    assert_eq!(solution.constant_term(), "3");
    assert_eq!(
        solution.to_json().unwrap(),
        r#"{"constantTerm":"3","selectedPoints":[{"x":1,"y":"4"},{"x":2,"y":"7"},{"x":3,"y":"12"}]}"#
    );

    let big = solution.constant_term_big_int().unwrap();
    assert_eq!(String::from(big.to_string(10).unwrap()), "3");
}

#[wasm_bindgen_test]
fn failures_carry_a_kind() {
    let err = match solve_dataset(r#"{"keys":{"n":1,"k":0}}"#) {
        Ok(_) => panic!("expected failure"),
        Err(err) => err,
    };
    let kind = Reflect::get(&err, &JsValue::from_str("kind")).unwrap();
    assert_eq!(kind.as_string().as_deref(), Some("InvalidCount"));
}

#[wasm_bindgen_test]
fn converts_single_values() {
    let value = decode_based("1A", 40).unwrap();
    assert_eq!(String::from(value.to_string(10).unwrap()), "76");

    let text = encode_based(JsBigInt::from(76u32), 40).unwrap();
    assert_eq!(text, "1A");

    assert!(decode_based("1A", 16).is_err());
}
