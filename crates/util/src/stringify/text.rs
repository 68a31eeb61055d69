use crate::value::{JsObject, JsValue, ObjectKind};

use super::date::iso_string;
use super::number::number_to_string;

/// Converts a value to text like `String(x)`.
///
/// Arrays join their elements with `,` (`null`/`undefined` and cyclic
/// references become empty), objects call a `toString` function property if
/// they have one. Never fails: a throwing `toString` falls back to the
/// built-in tag such as `[object Object]`.
///
/// # Examples
///
/// ```
/// use inert_util::{to_text, JsValue};
/// use serde_json::json;
///
/// assert_eq!(to_text(&JsValue::from(json!([1, null, [2, "a"]]))), "1,,2,a");
/// assert_eq!(to_text(&JsValue::from(json!({"a": 1}))), "[object Object]");
/// ```
pub fn to_text(value: &JsValue) -> String {
    let mut stack = Vec::new();
    text_of(value, &mut stack)
}

fn text_of(value: &JsValue, stack: &mut Vec<usize>) -> String {
    match value {
        JsValue::Undefined => "undefined".to_string(),
        JsValue::Null => "null".to_string(),
        JsValue::Bool(b) => b.to_string(),
        JsValue::Number(n) => number_to_string(*n),
        JsValue::BigInt(n) => n.to_string(),
        JsValue::String(s) => s.clone(),
        JsValue::Symbol(sym) => sym.to_string(),
        JsValue::Function(f) => format!("function {}() {{ [native code] }}", f.name()),
        JsValue::Array(arr) => {
            let addr = arr.addr();
            if stack.contains(&addr) {
                return String::new();
            }
            stack.push(addr);
            let parts: Vec<String> = arr
                .to_vec()
                .iter()
                .map(|item| match item {
                    JsValue::Undefined | JsValue::Null => String::new(),
                    item => text_of(item, stack),
                })
                .collect();
            stack.pop();
            parts.join(",")
        }
        JsValue::Object(obj) => object_text(obj, stack),
    }
}

fn object_text(obj: &JsObject, stack: &mut Vec<usize>) -> String {
    if let JsValue::Function(to_string) = obj.get("toString") {
        let this = JsValue::Object(obj.clone());
        if let Ok(result) = to_string.call(&this, &[]) {
            if !matches!(result, JsValue::Array(_) | JsValue::Object(_)) {
                return text_of(&result, stack);
            }
        }
    }
    match obj.kind() {
        ObjectKind::Ordinary => "[object Object]".to_string(),
        ObjectKind::Date(millis) => iso_string(millis).unwrap_or_else(|| "Invalid Date".to_string()),
        ObjectKind::RegExp { source, flags } => format!("/{}/{}", source, flags),
        ObjectKind::Map(_) => "[object Map]".to_string(),
        ObjectKind::Set(_) => "[object Set]".to_string(),
        ObjectKind::TypedArray(values) => values
            .iter()
            .map(|n| number_to_string(*n))
            .collect::<Vec<_>>()
            .join(","),
    }
}
