use crate::value::{JsArray, JsObject, JsValue};

use super::primitive::is_defined;

/// Returns `true` if `x` is an array. Typed arrays, array-like objects, maps
/// and sets are not arrays.
pub fn is_array(x: &JsValue) -> bool {
    matches!(x, JsValue::Array(_))
}

/// Returns `x` if `x` is an array.
pub fn to_array(x: &JsValue) -> Option<&JsArray> {
    match x {
        JsValue::Array(arr) => Some(arr),
        _ => None,
    }
}

/// Returns `x` if `x` is an array, otherwise a new empty array.
pub fn as_array(x: &JsValue) -> JsArray {
    to_array(x).cloned().unwrap_or_default()
}

/// Returns `true` if `x` is an array with a non-zero length. Holes count:
/// a sparse array of length 3 is non-empty.
pub fn is_non_empty_array(x: &JsValue) -> bool {
    to_non_empty_array(x).is_some()
}

pub fn to_non_empty_array(x: &JsValue) -> Option<&JsArray> {
    to_array(x).filter(|arr| !arr.is_empty())
}

/// Returns `true` if `x` is an object (including arrays) and not `null`.
/// Functions are not objects here: their `typeof` is `"function"`.
pub fn is_object(x: &JsValue) -> bool {
    matches!(x, JsValue::Array(_) | JsValue::Object(_))
}

/// Returns `x` if `x` is an object (including arrays).
pub fn to_object(x: &JsValue) -> Option<&JsValue> {
    is_object(x).then_some(x)
}

/// Returns `x` if `x` is an object (including arrays), otherwise a new empty object.
pub fn as_object(x: &JsValue) -> JsValue {
    match to_object(x) {
        Some(x) => x.clone(),
        None => JsValue::Object(JsObject::new()),
    }
}

/// Returns `true` if `x` is a plain object (shallow test): an object that is
/// not `null` and not an array. Dates, regular expressions, maps and sets
/// pass this test.
pub fn is_plain_object(x: &JsValue) -> bool {
    matches!(x, JsValue::Object(_))
}

/// Returns `x` if `x` is a plain object.
pub fn to_plain_object(x: &JsValue) -> Option<&JsObject> {
    match x {
        JsValue::Object(obj) => Some(obj),
        _ => None,
    }
}

/// Returns `x` if `x` is a plain object, otherwise a new empty object.
pub fn as_plain_object(x: &JsValue) -> JsObject {
    to_plain_object(x).cloned().unwrap_or_default()
}

/// Returns `true` if `x` is a plain object with an own enumerable string key
/// whose value satisfies `predicate`.
fn walk_plain_object_values(x: &JsValue, predicate: impl Fn(&JsValue) -> bool) -> bool {
    let Some(obj) = to_plain_object(x) else {
        return false;
    };
    obj.entries().iter().any(|(_, value)| predicate(value))
}

/// Returns `true` if `x` is a plain object with at least one own enumerable
/// string key. Symbol keys, inherited and non-enumerable properties do not count.
pub fn is_non_empty_plain_object(x: &JsValue) -> bool {
    walk_plain_object_values(x, |_| true)
}

pub fn to_non_empty_plain_object(x: &JsValue) -> Option<&JsObject> {
    to_plain_object(x).filter(|_| is_non_empty_plain_object(x))
}

/// Returns `true` if `x` is a plain object with at least one own enumerable
/// string key whose value is not `undefined`.
pub fn is_non_empty_json_object(x: &JsValue) -> bool {
    walk_plain_object_values(x, is_defined)
}

pub fn to_non_empty_json_object(x: &JsValue) -> Option<&JsObject> {
    to_plain_object(x).filter(|_| is_non_empty_json_object(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{JsFunction, JsSymbol};
    use serde_json::json;

    #[test]
    fn test_array() {
        let arr = JsArray::new();
        let value = JsValue::from(arr.clone());
        assert!(is_array(&value));
        assert!(to_array(&value).is_some_and(|a| a.ptr_eq(&arr)));
        assert!(as_array(&value).ptr_eq(&arr));
        assert!(!is_array(&JsObject::typed_array(vec![1.0]).into()));
        assert!(!is_array(&JsValue::from(json!({"length": 0}))));
        assert!(as_array(&JsValue::from("x")).is_empty());
    }

    #[test]
    fn test_non_empty_array() {
        assert!(is_non_empty_array(&JsValue::from(json!([0]))));
        assert!(is_non_empty_array(&JsArray::with_len(3).into()));
        assert!(!is_non_empty_array(&JsValue::from(json!([]))));
        assert!(!is_non_empty_array(&JsObject::typed_array(vec![1.0, 2.0]).into()));
        assert!(to_non_empty_array(&JsValue::from(json!([]))).is_none());
    }

    #[test]
    fn test_object() {
        assert!(is_object(&JsValue::from(json!([]))));
        assert!(is_object(&JsValue::from(json!({}))));
        assert!(!is_object(&JsValue::Null));
        assert!(!is_object(&JsFunction::constant("f", JsValue::Null).into()));
        let value = JsValue::from(json!([1]));
        assert!(to_object(&value).is_some_and(|v| *v == value));
        assert_eq!(as_object(&value), value);
        assert!(is_plain_object(&as_object(&JsValue::from(1))));
    }

    #[test]
    fn test_plain_object() {
        assert!(is_plain_object(&JsValue::from(json!({}))));
        assert!(is_plain_object(&JsObject::date(0.0).into()));
        assert!(is_plain_object(&JsObject::regexp("a", "").into()));
        assert!(is_plain_object(&JsObject::map_of(vec![]).into()));
        assert!(!is_plain_object(&JsValue::from(json!([]))));
        assert!(!is_plain_object(&JsValue::Null));

        let obj = JsObject::new();
        assert!(as_plain_object(&obj.clone().into()).ptr_eq(&obj));
        assert!(as_plain_object(&JsValue::from(json!([1, 2]))).keys().is_empty());
    }

    #[test]
    fn test_non_empty_plain_object() {
        assert!(is_non_empty_plain_object(&JsValue::from(json!({"a": 1}))));
        assert!(!is_non_empty_plain_object(&JsValue::from(json!({}))));
        assert!(!is_non_empty_plain_object(&JsValue::from(json!([1]))));
        assert!(!is_non_empty_plain_object(&JsObject::map_of(vec![("a".into(), 1.into())]).into()));
        assert!(!is_non_empty_plain_object(&JsObject::set_of(vec![1.into()]).into()));
        assert!(!is_non_empty_plain_object(&JsObject::date(0.0).into()));

        let proto = JsObject::from_entries([("inherited", 1)]);
        let inherited = JsObject::create(Some(&proto));
        assert!(!is_non_empty_plain_object(&inherited.clone().into()));
        inherited.set("own", 2);
        assert!(is_non_empty_plain_object(&inherited.into()));

        let sym = JsSymbol::new("key");
        let with_symbol = JsObject::from_entries([(sym.clone(), 1)]);
        assert!(!is_non_empty_plain_object(&with_symbol.clone().into()));
        with_symbol.set("a", 1);
        assert!(to_non_empty_plain_object(&with_symbol.clone().into()).is_some_and(|o| o.ptr_eq(&with_symbol)));

        let hidden = JsObject::new();
        hidden.define_property("hidden", 1, false);
        assert!(to_non_empty_plain_object(&hidden.into()).is_none());
    }

    #[test]
    fn test_non_empty_json_object() {
        assert!(is_non_empty_json_object(&JsValue::from(json!({"a": null}))));
        assert!(is_non_empty_json_object(&JsValue::from(json!({"a": false}))));
        assert!(is_non_empty_json_object(&JsValue::from(json!({"": 1}))));

        let only_undefined = JsObject::from_entries([("a", JsValue::Undefined), ("b", JsValue::Undefined)]);
        assert!(!is_non_empty_json_object(&only_undefined.clone().into()));
        assert!(is_non_empty_plain_object(&only_undefined.clone().into()));
        only_undefined.set("c", JsValue::Null);
        assert!(to_non_empty_json_object(&only_undefined.into()).is_some());

        assert!(!is_non_empty_json_object(&JsValue::from(json!([1, 2, 3]))));
        assert!(!is_non_empty_json_object(&JsObject::regexp("regex", "").into()));
    }
}
