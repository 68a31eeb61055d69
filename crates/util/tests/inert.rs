//! Integration tests for the inert array transforms.
//!
//! Identity is checked by pointer: a `Cow::Borrowed` result must point at the
//! exact slice that was passed in.

use std::borrow::Cow;
use std::cell::Cell;

use inert_util::{coalesce, inert_filter, inert_filter_map, JsArray, JsObject, JsValue};
use serde_json::json;

fn assert_same<T: Clone>(result: &Cow<'_, [T]>, input: &[T]) {
    match result {
        Cow::Borrowed(s) => assert!(std::ptr::eq(*s, input), "borrowed a different slice"),
        Cow::Owned(_) => panic!("expected the input slice back, got a new vector"),
    }
}

fn assert_new<T: Clone>(result: &Cow<'_, [T]>) {
    assert!(matches!(result, Cow::Owned(_)), "expected a new vector");
}

// ----------------------------------------------------------------- filter_map

#[test]
fn test_identity_returns_input() {
    let arr = vec![1, 2, 3];
    let result = inert_filter_map(arr.as_slice(), |x, _, _| Some(*x)).unwrap();
    assert_same(&result, &arr);
}

#[test]
fn test_identity_of_shared_objects() {
    let a = JsObject::from_entries([("a", 1)]);
    let b = JsObject::from_entries([("b", 2)]);
    let arr = vec![JsValue::from(a), JsValue::from(b)];
    let result = inert_filter_map(arr.as_slice(), |x, _, _| Some(x.clone())).unwrap();
    assert_same(&result, &arr);
}

#[test]
fn test_equal_but_distinct_object_forces_allocation() {
    let arr = vec![JsValue::from(json!({"a": 1}))];
    let result = inert_filter_map(arr.as_slice(), |_, _, _| Some(JsValue::from(json!({"a": 1})))).unwrap();
    assert_new(&result);
    assert!(inert_util::deep_equal(&result[0], &arr[0]));
}

#[test]
fn test_single_divergence_at_any_position() {
    let arr = vec![10, 20, 30, 40];
    for target in 0..arr.len() {
        let mapped = inert_filter_map(arr.as_slice(), |x: &i32, i, _| Some(if i == target { x + 1 } else { *x })).unwrap();
        assert_new(&mapped);
        let mut expected = arr.clone();
        expected[target] += 1;
        assert_eq!(mapped.as_ref(), expected.as_slice());

        let dropped = inert_filter_map(arr.as_slice(), |x, i, _| (i != target).then_some(*x)).unwrap();
        assert_new(&dropped);
        let mut expected = arr.clone();
        expected.remove(target);
        assert_eq!(dropped.as_ref(), expected.as_slice());
    }
}

#[test]
fn test_absent_input_skips_callback() {
    let calls = Cell::new(0);
    let mapped = inert_filter_map(None::<&[i32]>, |x: &i32, _, _| {
        calls.set(calls.get() + 1);
        Some(*x)
    });
    let filtered = inert_filter(None::<&[i32]>, |_, _, _| {
        calls.set(calls.get() + 1);
        true
    });
    assert!(mapped.is_none());
    assert!(filtered.is_none());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_empty_input_returned_without_calls() {
    let arr: Vec<String> = Vec::new();
    let calls = Cell::new(0);
    let result = inert_filter_map(arr.as_slice(), |x, _, _| {
        calls.set(calls.get() + 1);
        Some(x.clone())
    })
    .unwrap();
    assert_same(&result, &arr);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_nan_and_signed_zero() {
    let nans = vec![f64::NAN, f64::NAN];
    let result = inert_filter_map(nans.as_slice(), |x, _, _| Some(*x)).unwrap();
    assert_same(&result, &nans);

    let zero = vec![0.0_f64];
    let result = inert_filter_map(zero.as_slice(), |_, _, _| Some(-0.0)).unwrap();
    assert_new(&result);
    assert!(result[0] == 0.0 && result[0].is_sign_negative());

    let js = vec![JsValue::from(f64::NAN), JsValue::from(0)];
    let result = inert_filter_map(js.as_slice(), |x, _, _| Some(x.clone())).unwrap();
    assert_same(&result, &js);
}

#[test]
fn test_some_undefined_is_kept() {
    let arr = vec![JsValue::Undefined, JsValue::from(1)];
    let result = inert_filter_map(arr.as_slice(), |x, _, _| Some(x.clone())).unwrap();
    assert_same(&result, &arr);

    let result = inert_filter_map(arr.as_slice(), |_, _, _| Some(JsValue::Undefined)).unwrap();
    assert_new(&result);
    assert_eq!(result.as_ref(), &[JsValue::Undefined, JsValue::Undefined]);
}

#[test]
fn test_sparse_holes_are_undefined() {
    let arr = JsArray::with_len(3);
    arr.set(1, "x");
    let seen = std::cell::RefCell::new(Vec::new());
    let result = arr.inert_filter_map(|x, _, _| {
        seen.borrow_mut().push(x.clone());
        Some(x.clone())
    });
    assert!(result.ptr_eq(&arr));
    assert_eq!(
        seen.into_inner(),
        vec![JsValue::Undefined, JsValue::from("x"), JsValue::Undefined]
    );
}

#[test]
fn test_filter_and_map_together() {
    let arr = vec![1, 2, 3, 4, 5];
    let result = inert_filter_map(arr.as_slice(), |x: &i32, _, _| (x % 2 == 0).then_some(x * 10)).unwrap();
    assert_eq!(result.as_ref(), &[20, 40]);

    let upper: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let result = inert_filter_map(upper.as_slice(), |s: &String, _, _| Some(s.to_uppercase())).unwrap();
    assert_eq!(result.as_ref(), &["A".to_string(), "B".to_string(), "C".to_string()]);
}

// ----------------------------------------------------------------- filter

#[test]
fn test_filter_keeps_elements_unchanged() {
    let a = JsObject::new();
    let arr = vec![JsValue::from(a.clone()), JsValue::Null];
    let result = inert_filter(arr.as_slice(), |x: &JsValue, _, _| !x.is_nullish()).unwrap();
    assert_new(&result);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0], JsValue::from(a));
}

#[test]
fn test_filter_first_drop_seeds_prefix() {
    let arr = vec!["a", "b", "", "c", ""];
    let result = inert_filter(arr.as_slice(), |s: &&str, _, _| !s.is_empty()).unwrap();
    assert_eq!(result.as_ref(), &["a", "b", "c"]);
}

#[test]
fn test_filter_receives_index_and_slice() {
    let arr = vec![5, 6, 7];
    let mut indices = Vec::new();
    let result = inert_filter(arr.as_slice(), |_, i, whole| {
        assert!(std::ptr::eq(whole, arr.as_slice()));
        indices.push(i);
        true
    })
    .unwrap();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_same(&result, &arr);
}

// ----------------------------------------------------------------- coalesce

#[test]
fn test_coalesce_removes_falsy() {
    let arr = vec![
        JsValue::from(1),
        JsValue::Null,
        JsValue::from(0),
        JsValue::from("a"),
        JsValue::from(false),
        JsValue::from(2),
    ];
    let result = coalesce(arr.as_slice()).unwrap();
    assert_new(&result);
    assert_eq!(
        result.as_ref(),
        &[JsValue::from(1), JsValue::from("a"), JsValue::from(2)]
    );
}

#[test]
fn test_coalesce_all_truthy_is_identity() {
    let arr = vec![JsValue::from(1), JsValue::from(2), JsValue::from(3)];
    let result = coalesce(arr.as_slice()).unwrap();
    assert_same(&result, &arr);

    let containers = vec![JsValue::from(JsArray::new()), JsValue::from(JsObject::new())];
    let result = coalesce(containers.as_slice()).unwrap();
    assert_same(&result, &containers);
}

#[test]
fn test_coalesce_js_array_handle() {
    let arr = JsArray::from(vec![JsValue::from(1), JsValue::from(f64::NAN), JsValue::from("")]);
    let result = arr.coalesce();
    assert!(!result.ptr_eq(&arr));
    assert_eq!(result.to_vec(), vec![JsValue::from(1)]);

    let all_truthy: JsArray = ["x", "y"].into_iter().collect();
    assert!(all_truthy.coalesce().ptr_eq(&all_truthy));
}
