//! Calls into duck-typed JavaScript objects.
//!
//! The grid hosts are plain JS objects. A missing method or a throwing one
//! reads as `undefined`, so a partial host degrades to defaults instead of
//! failing the whole operation.

use js_sys::{Array, Function, Reflect};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// Call `target[method](...args)`.
pub(crate) fn call(target: &JsValue, method: &str, args: &[JsValue]) -> JsValue {
    let Ok(func) = Reflect::get(target, &JsValue::from_str(method)) else {
        return JsValue::UNDEFINED;
    };
    let Some(func) = func.dyn_ref::<Function>() else {
        log::debug!("host object has no `{method}` method");
        return JsValue::UNDEFINED;
    };
    let args: Array = args.iter().collect();
    func.apply(target, &args).unwrap_or(JsValue::UNDEFINED)
}

/// [`call`] and deserialize the result. `null`, `undefined` and values of the
/// wrong shape give `None`.
pub(crate) fn call_as<T: DeserializeOwned>(
    target: &JsValue,
    method: &str,
    args: &[JsValue],
) -> Option<T> {
    let value = call(target, method, args);
    if value.is_null() || value.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(value).ok()
}

pub(crate) fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}

/// Whether a JS argument was left out.
pub(crate) fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}
