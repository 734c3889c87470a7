//! Recover the constant term of an integer polynomial from shares whose
//! values are written in mixed bases (2 to 62).
//!
//! The pipeline is `parse -> decode -> select -> interpolate -> verify`:
//! the `k` shares with the smallest x determine the polynomial through exact
//! Lagrange interpolation, and every supplied share must then lie on it.
//! Native callers use [`solve_json`] or [`parse_dataset`] + [`solve`]; JS
//! hosts use the `solveDataset` export.

use anyhow::{anyhow, Context};
use js_sys::BigInt as JsBigInt;
use num_bigint::BigUint;
use serde::Serialize;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use web_sys::console;

pub mod dataset;
pub mod digits;
pub mod error;
pub mod interpolate;
pub mod rational;
pub mod solver;

pub use dataset::{parse_dataset, Dataset};
pub use digits::{decode, digit_value, encode, MAX_BASE, MIN_BASE};
pub use error::{ErrorReport, SolveError};
pub use interpolate::{constant_term, evaluate, evaluate_exact, Point};
pub use rational::Rational;
pub use solver::{select_points, solve, solve_json, verify, Solution};

#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> anyhow::Result<JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| anyhow!("failed to convert {} to a JS value: {}", std::any::type_name::<T>(), e))
}

fn host_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}

/// Solve failures reach JS as `{ kind, message }` objects.
fn solve_error(err: &SolveError) -> JsValue {
    let report = ErrorReport::from(err);
    console::warn_1(&JsValue::from_str(&format!("solve failed [{}]: {}", report.kind, report.message)));
    to_js(&report).unwrap_or_else(|_| JsValue::from_str(&report.message))
}

fn big_to_js(value: &impl ToString) -> Result<JsBigInt, JsValue> {
    JsBigInt::new(&JsValue::from_str(&value.to_string())).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = Solution)]
pub struct SolutionHandle {
    inner: Solution,
}

#[wasm_bindgen(js_class = Solution)]
impl SolutionHandle {
    #[wasm_bindgen(getter, js_name = constantTerm)]
    pub fn constant_term(&self) -> String {
        self.inner.constant_term.to_string()
    }

    #[wasm_bindgen(getter, js_name = constantTermBigInt)]
    pub fn constant_term_big_int(&self) -> Result<JsBigInt, JsValue> {
        big_to_js(&self.inner.constant_term)
    }

    #[wasm_bindgen(getter, js_name = selectedPoints)]
    pub fn selected_points(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.selected_points).map_err(host_error)
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner)
            .context("failed to serialize solution")
            .map_err(host_error)
    }
}

#[wasm_bindgen(js_name = solveDataset)]
pub fn solve_dataset(json: &str) -> Result<SolutionHandle, JsValue> {
    match solve_json(json) {
        Ok(inner) => Ok(SolutionHandle { inner }),
        Err(e) => Err(solve_error(&e)),
    }
}

#[wasm_bindgen(js_name = decodeBased)]
pub fn decode_based(digits: &str, base: u32) -> Result<JsBigInt, JsValue> {
    let value = decode(digits, base).map_err(|e| solve_error(&e))?;
    big_to_js(&value)
}

#[wasm_bindgen(js_name = encodeBased)]
pub fn encode_based(js_value: JsBigInt, base: u32) -> Result<String, JsValue> {
    let text = String::from(
        js_value
            .to_string(10)
            .map_err(|_e| JsValue::from_str("Failed to stringify JS BigInt"))?,
    );
    let value = BigUint::from_str(&text)
        .with_context(|| format!("only non-negative integers can be encoded, got {}", text))
        .map_err(host_error)?;
    encode(&value, base).map_err(|e| solve_error(&e))
}
