//! JavaScript truthiness, as used by `Boolean(x)` and `!!x`.

use std::rc::Rc;
use std::sync::Arc;

use crate::value::JsValue;

/// Truthy/falsy classification.
///
/// Falsy values are `false`, `null`/`undefined` (and `None`), zero, `NaN`,
/// zero bigints and the empty string. Everything else is truthy, including
/// empty containers and callables.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// A `char` is a one-character string.
impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Containers are objects, and objects are always truthy.
impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for JsValue {
    fn is_truthy(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Bool(b) => *b,
            JsValue::Number(n) => n.is_truthy(),
            JsValue::BigInt(n) => *n != 0,
            JsValue::String(s) => !s.is_empty(),
            JsValue::Symbol(_) | JsValue::Function(_) | JsValue::Array(_) | JsValue::Object(_) => {
                true
            }
        }
    }
}
