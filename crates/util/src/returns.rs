//! Functions returning a fixed value, handy as default callbacks.

use crate::value::JsValue;

pub fn noop() {}

pub fn returns_undefined() -> JsValue {
    JsValue::Undefined
}

pub fn returns_null() -> JsValue {
    JsValue::Null
}

pub fn returns_false() -> JsValue {
    JsValue::Bool(false)
}

pub fn returns_true() -> JsValue {
    JsValue::Bool(true)
}

pub fn returns_empty_string() -> JsValue {
    JsValue::String(String::new())
}
