use crate::truthy::Truthy;
use crate::value::JsValue;

/// Returns `true` if `x` is not `undefined`.
pub fn is_defined(x: &JsValue) -> bool {
    !matches!(x, JsValue::Undefined)
}

pub fn is_true(x: &JsValue) -> bool {
    matches!(x, JsValue::Bool(true))
}

/// Returns `Some(true)` if `x` is `true`, otherwise `None`.
pub fn to_true(x: &JsValue) -> Option<bool> {
    is_true(x).then_some(true)
}

/// Returns `true` if `x` is `true`, otherwise `false`.
pub fn as_true(x: &JsValue) -> bool {
    is_true(x)
}

/// Returns `true` if `Boolean(x)` is `false`.
pub fn is_falsy(x: &JsValue) -> bool {
    x.is_falsy()
}

/// Returns `x` if `Boolean(x)` is `false`, otherwise `None`.
pub fn to_falsy(x: &JsValue) -> Option<&JsValue> {
    is_falsy(x).then_some(x)
}

/// Returns `true` if `Boolean(x)` is `true`.
pub fn is_truthy(x: &JsValue) -> bool {
    x.is_truthy()
}

/// Returns `x` if `Boolean(x)` is `true`, otherwise `None`.
pub fn to_truthy(x: &JsValue) -> Option<&JsValue> {
    is_truthy(x).then_some(x)
}

pub fn is_boolean(x: &JsValue) -> bool {
    matches!(x, JsValue::Bool(_))
}

/// Returns `x` if `x` is `true` or `false`, otherwise `None`.
pub fn to_boolean(x: &JsValue) -> Option<bool> {
    match x {
        JsValue::Bool(b) => Some(*b),
        _ => None,
    }
}

/// Returns `true` if `x` is a number, `false` if `x` is `NaN` or any other value.
pub fn is_number(x: &JsValue) -> bool {
    to_number(x).is_some()
}

/// Returns `x` if `x` is a number; `NaN` and other values become `None`.
pub fn to_number(x: &JsValue) -> Option<f64> {
    match x {
        JsValue::Number(n) if !n.is_nan() => Some(*n),
        _ => None,
    }
}

/// Returns `x` if `x` is a number; `NaN` and other values become `0`.
pub fn as_number(x: &JsValue) -> f64 {
    to_number(x).unwrap_or(0.0)
}

pub fn is_string(x: &JsValue) -> bool {
    matches!(x, JsValue::String(_))
}

/// Returns `x` if `x` is a string, otherwise `None`.
pub fn to_string(x: &JsValue) -> Option<&str> {
    match x {
        JsValue::String(s) => Some(s),
        _ => None,
    }
}

/// Returns `x` if `x` is a string, otherwise `""`.
pub fn as_string(x: &JsValue) -> &str {
    to_string(x).unwrap_or("")
}

/// Returns `true` if `x` is a string and not `""`.
pub fn is_non_empty_string(x: &JsValue) -> bool {
    to_non_empty_string(x).is_some()
}

pub fn to_non_empty_string(x: &JsValue) -> Option<&str> {
    to_string(x).filter(|s| !s.is_empty())
}
