//! inert-util - Type guards, coercions and allocation-avoiding array helpers
//!
//! Values are modelled as [`JsValue`], a JavaScript-like dynamic value whose
//! arrays and objects are shared handles. On top of it the crate provides:
//!
//! - guards and coercions ([`is_to_as`]): `is_number`, `to_plain_object`,
//!   `as_array`, ...;
//! - inert transforms ([`array`]): filter and filter-map that return the input
//!   unchanged (by identity) when nothing would change;
//! - [`display`], which renders any value as user-facing text.

pub mod array;
pub mod error;
pub mod is_to_as;
pub mod print;
pub mod returns;
pub mod same_value;
pub mod stringify;
pub mod truthy;
pub mod value;

// Re-exports for convenience
pub use array::{coalesce, inert_filter, inert_filter_map, inert_filter_map_with, inert_filter_with};
pub use error::StringifyError;
pub use is_to_as::*;
pub use print::display;
pub use returns::{noop, returns_empty_string, returns_false, returns_null, returns_true, returns_undefined};
pub use same_value::{same_value_f64, SameValue};
pub use stringify::{iso_string, number_to_string, stringify, to_text};
pub use truthy::Truthy;
pub use value::{
    deep_equal, JsArray, JsFunction, JsObject, JsSymbol, JsValue, NativeFn, ObjectKind, PropertyKey,
};
