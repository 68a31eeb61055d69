use crate::value::{JsObject, JsValue};

use super::object::to_plain_object;
use super::primitive::is_true;

/// Creates an object from the own enumerable string-keyed entries of `x`
/// whose value satisfies `classify`.
///
/// Returns `None` if `x` is not a plain object or no entry matches: an empty
/// selection is absent, not `{}`.
///
/// # Examples
///
/// ```
/// use inert_util::{is_number, select_entries_by, JsValue};
/// use serde_json::json;
///
/// let x = JsValue::from(json!({"a": 1, "b": "x"}));
/// let numbers = select_entries_by(&x, is_number).unwrap();
/// assert_eq!(numbers.keys(), vec!["a"]);
///
/// assert!(select_entries_by(&JsValue::from(json!({"a": "x"})), is_number).is_none());
/// ```
pub fn select_entries_by<F>(x: &JsValue, mut classify: F) -> Option<JsObject>
where
    F: FnMut(&JsValue) -> bool,
{
    let obj = to_plain_object(x)?;
    let mut result: Option<JsObject> = None;
    for (key, value) in obj.entries() {
        if classify(&value) {
            result.get_or_insert_with(JsObject::new).set(key, value);
        }
    }
    result
}

/// Selects the entries of `x` whose values are `true`.
pub fn select_true_entries(x: &JsValue) -> Option<JsObject> {
    select_entries_by(x, is_true)
}
