//! JSON and text serialization with JavaScript semantics.
//!
//! [`stringify`] follows `JSON.stringify(value, null, indent)`; [`to_text`]
//! follows `String(value)`.

mod date;
mod number;
mod text;

pub use date::iso_string;
pub use number::number_to_string;
pub use text::to_text;

use crate::error::StringifyError;
use crate::value::{JsArray, JsObject, JsValue, ObjectKind, PropertyKey};

/// `JSON.stringify` caps the indentation at ten spaces.
const MAX_INDENT: usize = 10;

/// Serializes a value to JSON text like `JSON.stringify(value, null, indent)`.
///
/// Returns `Ok(None)` when the value has no JSON representation (`undefined`,
/// functions and symbols at the top level).
///
/// # Errors
///
/// - [`StringifyError::BigInt`] if a bigint is reachable;
/// - [`StringifyError::Circular`] if an array or object contains itself;
/// - [`StringifyError::Thrown`] if a `toJSON` method throws.
///
/// # Examples
///
/// ```
/// use inert_util::{stringify, JsValue};
/// use serde_json::json;
///
/// let value = JsValue::from(json!({"a": [1, "b"]}));
/// assert_eq!(stringify(&value, 0).unwrap().as_deref(), Some(r#"{"a":[1,"b"]}"#));
/// assert_eq!(stringify(&JsValue::Undefined, 2).unwrap(), None);
/// ```
pub fn stringify(value: &JsValue, indent: usize) -> Result<Option<String>, StringifyError> {
    let mut stringifier = Stringifier {
        gap: " ".repeat(indent.min(MAX_INDENT)),
        stack: Vec::new(),
        inspect: false,
    };
    stringifier.property("", value, "")
}

/// Compact JSON-like rendering for `Debug`. Never runs user functions:
/// `toJSON` is ignored, bigints print as `1n` and cycles as `[Circular]`.
pub(crate) fn debug_repr(value: &JsValue) -> String {
    let mut stringifier = Stringifier {
        gap: String::new(),
        stack: Vec::new(),
        inspect: true,
    };
    match stringifier.property("", value, "") {
        Ok(Some(text)) => text,
        _ => match value {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Symbol(sym) => sym.to_string(),
            JsValue::Function(f) => format!("[Function: {}]", f.name()),
            _ => "null".to_string(),
        },
    }
}

struct Stringifier {
    gap: String,
    /// Addresses of the arrays/objects currently being serialized.
    stack: Vec<usize>,
    /// Debug rendering: skip user `toJSON` and render what JSON rejects.
    inspect: bool,
}

impl Stringifier {
    fn property(
        &mut self,
        key: &str,
        value: &JsValue,
        indent: &str,
    ) -> Result<Option<String>, StringifyError> {
        let value = if self.inspect {
            builtin_json_value(value)
        } else {
            to_json_value(key, value)?
        };
        match &value {
            JsValue::Null => Ok(Some("null".to_string())),
            JsValue::Bool(b) => Ok(Some(b.to_string())),
            JsValue::Number(n) if n.is_finite() => Ok(Some(number_to_string(*n))),
            JsValue::Number(_) => Ok(Some("null".to_string())),
            JsValue::BigInt(n) if self.inspect => Ok(Some(format!("{}n", n))),
            JsValue::BigInt(_) => Err(StringifyError::BigInt),
            JsValue::String(s) => Ok(Some(quote(s))),
            JsValue::Undefined | JsValue::Symbol(_) | JsValue::Function(_) => Ok(None),
            JsValue::Array(arr) => self.nested(&value, indent, |this, inner| this.array(arr, inner)),
            JsValue::Object(obj) => self.nested(&value, indent, |this, inner| this.object(obj, inner)),
        }
    }

    fn nested<F>(&mut self, value: &JsValue, indent: &str, write: F) -> Result<Option<String>, StringifyError>
    where
        F: FnOnce(&mut Self, &str) -> Result<Vec<String>, StringifyError>,
    {
        let addr = value.container_addr();
        if let Some(addr) = addr {
            if self.stack.contains(&addr) {
                if self.inspect {
                    return Ok(Some("[Circular]".to_string()));
                }
                return Err(StringifyError::Circular);
            }
            self.stack.push(addr);
        }
        let inner = format!("{}{}", indent, self.gap);
        let parts = write(self, &inner);
        if addr.is_some() {
            self.stack.pop();
        }
        let (open, close) = match value {
            JsValue::Array(_) => ('[', ']'),
            _ => ('{', '}'),
        };
        Ok(Some(self.join(open, close, &parts?, indent, &inner)))
    }

    fn array(&mut self, arr: &JsArray, indent: &str) -> Result<Vec<String>, StringifyError> {
        arr.to_vec()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let text = self.property(&index.to_string(), item, indent)?;
                Ok(text.unwrap_or_else(|| "null".to_string()))
            })
            .collect()
    }

    fn object(&mut self, obj: &JsObject, indent: &str) -> Result<Vec<String>, StringifyError> {
        let separator = if self.gap.is_empty() { ":" } else { ": " };
        let mut members = Vec::new();
        for key in obj.keys() {
            let value = obj
                .get_own(&PropertyKey::String(key.clone()))
                .unwrap_or(JsValue::Undefined);
            if let Some(text) = self.property(&key, &value, indent)? {
                members.push(format!("{}{}{}", quote(&key), separator, text));
            }
        }
        Ok(members)
    }

    fn join(&self, open: char, close: char, parts: &[String], indent: &str, inner: &str) -> String {
        if parts.is_empty() {
            return format!("{}{}", open, close);
        }
        if self.gap.is_empty() {
            return format!("{}{}{}", open, parts.join(","), close);
        }
        let separator = format!(",\n{}", inner);
        format!("{}\n{}{}\n{}{}", open, inner, parts.join(&separator), indent, close)
    }
}

/// Applies `toJSON`: a callable `toJSON` property, or the built-in one of dates.
fn to_json_value(key: &str, value: &JsValue) -> Result<JsValue, StringifyError> {
    let JsValue::Object(obj) = value else {
        return Ok(value.clone());
    };
    match obj.get("toJSON") {
        JsValue::Function(to_json) => to_json
            .call(value, &[JsValue::from(key)])
            .map_err(|thrown| StringifyError::Thrown(to_text(&thrown))),
        _ => Ok(builtin_json_value(value)),
    }
}

/// The built-in `toJSON` of dates; every other value serializes as itself.
fn builtin_json_value(value: &JsValue) -> JsValue {
    match value {
        JsValue::Object(obj) => match obj.kind() {
            ObjectKind::Date(millis) => iso_string(millis).map_or(JsValue::Null, JsValue::String),
            _ => value.clone(),
        },
        _ => value.clone(),
    }
}

fn quote(s: &str) -> String {
    // String serialization cannot fail - serde_json always successfully serializes strings
    serde_json::to_string(s).expect("string serialization is infallible")
}
