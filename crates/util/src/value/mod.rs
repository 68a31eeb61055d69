//! [`JsValue`]: the dynamically typed value the guards classify.
//!
//! Primitives are stored inline; arrays, objects, functions and symbols are
//! reference-counted handles, so two values can be "the same reference"
//! exactly as in JavaScript.

mod array;
mod function;
mod object;
mod symbol;

pub use array::JsArray;
pub use function::{JsFunction, NativeFn};
pub use object::{JsObject, ObjectKind, PropertyKey};
pub use symbol::JsSymbol;

use crate::same_value::SameValue;

/// Any JavaScript value.
#[derive(Debug, Clone, Default)]
pub enum JsValue {
    /// JavaScript `undefined`.
    #[default]
    Undefined,
    /// JavaScript `null`.
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(JsSymbol),
    Function(JsFunction),
    Array(JsArray),
    Object(JsObject),
}

impl JsValue {
    /// Returns the `typeof` string of the value.
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null | JsValue::Array(_) | JsValue::Object(_) => "object",
            JsValue::Bool(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::BigInt(_) => "bigint",
            JsValue::String(_) => "string",
            JsValue::Symbol(_) => "symbol",
            JsValue::Function(_) => "function",
        }
    }

    /// `null` or `undefined`, the values `x == null` matches.
    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }

    /// Address of the shared allocation behind arrays and objects.
    pub(crate) fn container_addr(&self) -> Option<usize> {
        match self {
            JsValue::Array(arr) => Some(arr.addr()),
            JsValue::Object(obj) => Some(obj.addr()),
            _ => None,
        }
    }
}

/// Equality is same-value identity (`Object.is`): `NaN` equals itself, `+0`
/// and `-0` differ, and arrays, objects, functions and symbols compare by
/// reference. Use [`crate::deep_equal`] for structural comparison.
impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_value(other)
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Bool(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsValue {
                fn from(n: $ty) -> Self {
                    JsValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32);

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<JsSymbol> for JsValue {
    fn from(s: JsSymbol) -> Self {
        JsValue::Symbol(s)
    }
}

impl From<JsFunction> for JsValue {
    fn from(f: JsFunction) -> Self {
        JsValue::Function(f)
    }
}

impl From<JsArray> for JsValue {
    fn from(arr: JsArray) -> Self {
        JsValue::Array(arr)
    }
}

impl From<JsObject> for JsValue {
    fn from(obj: JsObject) -> Self {
        JsValue::Object(obj)
    }
}

impl From<Vec<JsValue>> for JsValue {
    fn from(elements: Vec<JsValue>) -> Self {
        JsValue::Array(JsArray::from_vec(elements))
    }
}

/// `None` becomes `undefined`.
impl<T: Into<JsValue>> From<Option<T>> for JsValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(JsValue::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for JsValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsValue::Null,
            serde_json::Value::Bool(b) => JsValue::Bool(b),
            serde_json::Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => JsValue::String(s),
            serde_json::Value::Array(arr) => {
                JsValue::Array(arr.into_iter().map(JsValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                JsValue::Object(JsObject::from_entries(map.into_iter().map(|(k, v)| (k, JsValue::from(v)))))
            }
        }
    }
}

/// Structural equality: arrays and objects are compared element by element
/// (own enumerable string keys only), everything else by same-value identity.
///
/// # Examples
///
/// ```
/// use inert_util::{deep_equal, JsValue};
/// use serde_json::json;
///
/// let a = JsValue::from(json!({"foo": [1, 2, 3]}));
/// let b = JsValue::from(json!({"foo": [1, 2, 3]}));
///
/// assert_ne!(a, b);
/// assert!(deep_equal(&a, &b));
/// ```
pub fn deep_equal(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Array(arr_a), JsValue::Array(arr_b)) => {
            if arr_a.ptr_eq(arr_b) {
                return true;
            }
            let (arr_a, arr_b) = (arr_a.to_vec(), arr_b.to_vec());
            arr_a.len() == arr_b.len() && arr_a.iter().zip(&arr_b).all(|(x, y)| deep_equal(x, y))
        }
        (JsValue::Object(obj_a), JsValue::Object(obj_b)) => {
            if obj_a.ptr_eq(obj_b) {
                return true;
            }
            let (entries_a, entries_b) = (obj_a.entries(), obj_b.entries());
            if entries_a.len() != entries_b.len() {
                return false;
            }
            entries_a.iter().all(|(key, val_a)| {
                entries_b
                    .iter()
                    .find(|(k, _)| k == key)
                    .is_some_and(|(_, val_b)| deep_equal(val_a, val_b))
            })
        }
        _ => a.same_value(b),
    }
}
