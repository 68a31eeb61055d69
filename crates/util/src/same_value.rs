//! Same-value identity, the comparison behind JavaScript's `Object.is`.

use std::rc::Rc;
use std::sync::Arc;

use crate::value::JsValue;

/// Identity comparison used by the inert transforms to decide whether an
/// element "changed".
///
/// Unlike `PartialEq` for floats, `NaN` is identical to itself and `+0` is
/// not identical to `-0`. Shared handles (`Rc`, `Arc`, JS arrays and objects)
/// compare by reference, not by contents.
pub trait SameValue {
    fn same_value(&self, other: &Self) -> bool;
}

/// `Object.is` for numbers.
pub fn same_value_f64(a: f64, b: f64) -> bool {
    if a.is_nan() {
        return b.is_nan();
    }
    a == b && a.is_sign_negative() == b.is_sign_negative()
}

impl SameValue for f64 {
    fn same_value(&self, other: &Self) -> bool {
        same_value_f64(*self, *other)
    }
}

impl SameValue for f32 {
    fn same_value(&self, other: &Self) -> bool {
        same_value_f64(f64::from(*self), f64::from(*other))
    }
}

macro_rules! impl_same_value_eq {
    ($($ty:ty),*) => {
        $(
            impl SameValue for $ty {
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_same_value_eq!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, (), String, str
);

impl<T: SameValue + ?Sized> SameValue for &T {
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_value(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> SameValue for Rc<T> {
    fn same_value(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameValue for Arc<T> {
    fn same_value(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl SameValue for JsValue {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) | (JsValue::Null, JsValue::Null) => true,
            (JsValue::Bool(a), JsValue::Bool(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => same_value_f64(*a, *b),
            (JsValue::BigInt(a), JsValue::BigInt(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a.ptr_eq(b),
            (JsValue::Function(a), JsValue::Function(b)) => a.ptr_eq(b),
            (JsValue::Array(a), JsValue::Array(b)) => a.ptr_eq(b),
            (JsValue::Object(a), JsValue::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}
