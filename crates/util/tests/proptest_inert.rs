//! Property-based tests for the inert transforms.
//!
//! A transform that changes nothing must hand back the input slice; a
//! transform that changes exactly one element must allocate and produce the
//! expected sequence.

use std::borrow::Cow;

use proptest::prelude::*;

use inert_util::{coalesce, inert_filter, inert_filter_map, JsValue};

fn is_input<T: Clone>(result: &Cow<'_, [T]>, input: &[T]) -> bool {
    matches!(result, Cow::Borrowed(s) if std::ptr::eq(*s, input))
}

fn js_primitive() -> impl Strategy<Value = JsValue> {
    prop_oneof![
        Just(JsValue::Undefined),
        Just(JsValue::Null),
        any::<bool>().prop_map(JsValue::from),
        any::<f64>().prop_map(JsValue::from),
        "[a-z]{0,4}".prop_map(JsValue::from),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn identity_map_returns_input(items in prop::collection::vec(any::<i64>(), 0..32)) {
        let result = inert_filter_map(items.as_slice(), |x: &i64, _, _| Some(*x)).unwrap();
        prop_assert!(is_input(&result, &items));
    }

    #[test]
    fn identity_map_of_js_values_returns_input(items in prop::collection::vec(js_primitive(), 0..32)) {
        let result = inert_filter_map(items.as_slice(), |x: &JsValue, _, _| Some(x.clone())).unwrap();
        prop_assert!(is_input(&result, &items));
    }

    #[test]
    fn keep_all_filter_returns_input(items in prop::collection::vec(any::<u8>(), 0..32)) {
        let result = inert_filter(items.as_slice(), |_: &u8, _, _| true).unwrap();
        prop_assert!(is_input(&result, &items));
    }

    #[test]
    fn single_replacement_allocates(
        (items, target) in prop::collection::vec(any::<i32>(), 1..32)
            .prop_flat_map(|items| {
                let len = items.len();
                (Just(items), 0..len)
            })
    ) {
        let result = inert_filter_map(items.as_slice(), |x: &i32, i, _| {
            Some(if i == target { x.wrapping_add(1) } else { *x })
        })
        .unwrap();
        prop_assert!(matches!(result, Cow::Owned(_)));

        let mut expected = items.clone();
        expected[target] = expected[target].wrapping_add(1);
        prop_assert_eq!(result.as_ref(), expected.as_slice());
    }

    #[test]
    fn single_drop_allocates(
        (items, target) in prop::collection::vec(any::<i32>(), 1..32)
            .prop_flat_map(|items| {
                let len = items.len();
                (Just(items), 0..len)
            })
    ) {
        let result = inert_filter_map(items.as_slice(), |x: &i32, i, _| (i != target).then_some(*x)).unwrap();
        prop_assert!(matches!(result, Cow::Owned(_)));

        let mut expected = items.clone();
        expected.remove(target);
        prop_assert_eq!(result.as_ref(), expected.as_slice());
    }

    #[test]
    fn filter_matches_iterator_filter(items in prop::collection::vec(any::<u8>(), 0..32)) {
        let result = inert_filter(items.as_slice(), |x: &u8, _, _| x % 3 != 0).unwrap();
        let expected: Vec<u8> = items.iter().copied().filter(|x| x % 3 != 0).collect();
        prop_assert_eq!(result.as_ref(), expected.as_slice());
        prop_assert_eq!(is_input(&result, &items), expected.len() == items.len());
    }

    #[test]
    fn coalesce_keeps_only_truthy(items in prop::collection::vec(js_primitive(), 0..32)) {
        let result = coalesce(items.as_slice()).unwrap();
        prop_assert!(result.iter().all(inert_util::is_truthy));
        let all_truthy = items.iter().all(inert_util::is_truthy);
        prop_assert_eq!(is_input(&result, &items), all_truthy);
    }
}
