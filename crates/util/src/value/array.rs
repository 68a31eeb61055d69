use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::JsValue;

/// A shared, mutable array handle.
///
/// Cloning the handle does not copy the elements: both clones refer to the
/// same array, and [`JsArray::ptr_eq`] reports it. Holes of a sparse array are
/// stored as [`JsValue::Undefined`].
#[derive(Clone, Default)]
pub struct JsArray(Rc<RefCell<Vec<JsValue>>>);

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(elements: Vec<JsValue>) -> Self {
        Self(Rc::new(RefCell::new(elements)))
    }

    /// Creates a sparse array of `len` holes, like `new Array(len)`.
    pub fn with_len(len: usize) -> Self {
        Self::from_vec(vec![JsValue::Undefined; len])
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Reads the element at `index`; out-of-range reads yield `undefined`.
    pub fn get(&self, index: usize) -> JsValue {
        self.0
            .borrow()
            .get(index)
            .cloned()
            .unwrap_or(JsValue::Undefined)
    }

    /// Writes `value` at `index`, growing the array with holes if needed.
    pub fn set(&self, index: usize, value: impl Into<JsValue>) {
        let mut elements = self.0.borrow_mut();
        if index >= elements.len() {
            elements.resize(index + 1, JsValue::Undefined);
        }
        elements[index] = value.into();
    }

    pub fn push(&self, value: impl Into<JsValue>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Copies the current elements out of the array.
    pub fn to_vec(&self) -> Vec<JsValue> {
        self.0.borrow().clone()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl From<Vec<JsValue>> for JsArray {
    fn from(elements: Vec<JsValue>) -> Self {
        Self::from_vec(elements)
    }
}

impl<V: Into<JsValue>> FromIterator<V> for JsArray {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Debug for JsArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsArray{}", crate::stringify::debug_repr(&JsValue::Array(self.clone())))
    }
}
