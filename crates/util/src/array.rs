//! Inert array transforms: filter and filter-map that hand back the input
//! slice untouched when nothing would change.
//!
//! The result is a [`Cow`]. `Cow::Borrowed` always points at the very slice
//! that was passed in, so callers can detect a no-op transform by identity
//! (`std::ptr::eq`) or simply by matching on the variant. A new `Vec` is only
//! allocated once an element is dropped or replaced by a value that is not
//! [same-value](SameValue) identical to the original.

use std::borrow::Cow;

use tracing::trace;

use crate::same_value::SameValue;
use crate::truthy::Truthy;
use crate::value::{JsArray, JsValue};

/// Lazy filter-map that avoids allocating when possible.
///
/// `callback` is called once per element, in order, with the element, its
/// index and the whole input slice. Returning `None` drops the element;
/// returning `Some(value)` keeps `value` in its place.
///
/// Returns the input slice itself if every call returned `Some` of a value
/// identical to the element, otherwise a new vector with the mapped items.
/// An absent input yields `None` without calling `callback`.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use inert_util::inert_filter_map;
///
/// let arr = [1, 2, 3];
/// let same = inert_filter_map(&arr[..], |x, _, _| Some(*x)).unwrap();
/// assert!(matches!(same, Cow::Borrowed(s) if std::ptr::eq(s, &arr[..])));
///
/// let odd = inert_filter_map(&arr[..], |x, _, _| (x % 2 == 1).then_some(*x)).unwrap();
/// assert_eq!(odd.as_ref(), &[1, 3]);
/// ```
pub fn inert_filter_map<'a, T, A, F>(arr: A, mut callback: F) -> Option<Cow<'a, [T]>>
where
    T: Clone + SameValue,
    A: Into<Option<&'a [T]>>,
    F: FnMut(&T, usize, &[T]) -> Option<T>,
{
    let arr = arr.into()?;
    let mut result: Option<Vec<T>> = None;
    for (index, item) in arr.iter().enumerate() {
        let new_item = callback(item, index, arr);
        let diverged = match &new_item {
            Some(new_item) => !new_item.same_value(item),
            None => true,
        };
        if diverged && result.is_none() {
            trace!(index, len = arr.len(), "inert_filter_map: materializing");
            result = Some(arr[..index].to_vec());
        }
        if let (Some(result), Some(new_item)) = (result.as_mut(), new_item) {
            result.push(new_item);
        }
    }
    Some(match result {
        Some(result) => Cow::Owned(result),
        None => Cow::Borrowed(arr),
    })
}

/// [`inert_filter_map`] with an explicit context passed to every call, the
/// equivalent of binding `this` for the callback.
pub fn inert_filter_map_with<'a, T, C, A, F>(
    arr: A,
    context: &C,
    mut callback: F,
) -> Option<Cow<'a, [T]>>
where
    T: Clone + SameValue,
    C: ?Sized,
    A: Into<Option<&'a [T]>>,
    F: FnMut(&C, &T, usize, &[T]) -> Option<T>,
{
    inert_filter_map(arr, |item, index, arr| callback(context, item, index, arr))
}

/// Lazy filter that avoids allocating when possible.
///
/// Returns the input slice itself if `predicate` returns `true` for every
/// element, otherwise a new vector with the kept elements. An absent input
/// yields `None` without calling `predicate`.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use inert_util::inert_filter;
///
/// let arr = vec!["a", "b", ""];
/// let kept = inert_filter(arr.as_slice(), |s, _, _| !s.is_empty()).unwrap();
/// assert!(matches!(kept, Cow::Owned(_)));
/// assert_eq!(kept.as_ref(), &["a", "b"]);
/// ```
pub fn inert_filter<'a, T, A, P>(arr: A, mut predicate: P) -> Option<Cow<'a, [T]>>
where
    T: Clone,
    A: Into<Option<&'a [T]>>,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let arr = arr.into()?;
    let mut result: Option<Vec<T>> = None;
    for (index, item) in arr.iter().enumerate() {
        if predicate(item, index, arr) {
            if let Some(result) = result.as_mut() {
                result.push(item.clone());
            }
        } else if result.is_none() {
            trace!(index, len = arr.len(), "inert_filter: materializing");
            result = Some(arr[..index].to_vec());
        }
    }
    Some(match result {
        Some(result) => Cow::Owned(result),
        None => Cow::Borrowed(arr),
    })
}

/// [`inert_filter`] with an explicit context passed to every call.
pub fn inert_filter_with<'a, T, C, A, P>(arr: A, context: &C, mut predicate: P) -> Option<Cow<'a, [T]>>
where
    T: Clone,
    C: ?Sized,
    A: Into<Option<&'a [T]>>,
    P: FnMut(&C, &T, usize, &[T]) -> bool,
{
    inert_filter(arr, |item, index, arr| predicate(context, item, index, arr))
}

/// Returns the same slice if all its items are truthy, otherwise a new vector
/// with the falsy items removed.
///
/// # Examples
///
/// ```
/// use inert_util::{coalesce, JsValue};
///
/// let arr = vec![JsValue::from(1), JsValue::Null, JsValue::from("a")];
/// let out = coalesce(arr.as_slice()).unwrap();
/// assert_eq!(out.len(), 2);
/// ```
pub fn coalesce<'a, T, A>(arr: A) -> Option<Cow<'a, [T]>>
where
    T: Clone + Truthy,
    A: Into<Option<&'a [T]>>,
{
    inert_filter(arr, |item, _, _| item.is_truthy())
}

/// Inert transforms over shared array handles. An unchanged run returns a
/// clone of the same handle; any change returns a new array.
///
/// The callback receives the element, its index and the array handle itself,
/// so it can compare against the original with [`JsArray::ptr_eq`]. Elements
/// come from a snapshot taken before the first call, so the callback may
/// freely read or mutate the array.
impl JsArray {
    /// Handle-level [`inert_filter_map`].
    pub fn inert_filter_map<F>(&self, mut callback: F) -> JsArray
    where
        F: FnMut(&JsValue, usize, &JsArray) -> Option<JsValue>,
    {
        let snapshot = self.to_vec();
        self.rewrap(inert_filter_map(snapshot.as_slice(), |item, index, _| {
            callback(item, index, self)
        }))
    }

    /// Handle-level [`inert_filter`].
    pub fn inert_filter<P>(&self, mut predicate: P) -> JsArray
    where
        P: FnMut(&JsValue, usize, &JsArray) -> bool,
    {
        let snapshot = self.to_vec();
        self.rewrap(inert_filter(snapshot.as_slice(), |item, index, _| {
            predicate(item, index, self)
        }))
    }

    pub fn coalesce(&self) -> JsArray {
        let snapshot = self.to_vec();
        self.rewrap(coalesce(snapshot.as_slice()))
    }

    fn rewrap(&self, result: Option<Cow<'_, [JsValue]>>) -> JsArray {
        match result {
            Some(Cow::Owned(elements)) => JsArray::from_vec(elements),
            _ => self.clone(),
        }
    }
}
