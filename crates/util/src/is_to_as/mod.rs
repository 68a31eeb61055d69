//! Type guards (`is_*`), coercions to an optional value (`to_*`) and
//! coercions with a default (`as_*`).
//!
//! - `is_x(x)` reports whether `x` belongs to the category;
//! - `to_x(x)` returns `x` itself if it does, otherwise `None`;
//! - `as_x(x)` returns `x` itself if it does, otherwise the category's
//!   default (`0`, `""`, `false`, a new `[]` or `{}`).

mod object;
mod primitive;
mod select;

pub use object::{
    as_array, as_object, as_plain_object, is_array, is_non_empty_array, is_non_empty_json_object,
    is_non_empty_plain_object, is_object, is_plain_object, to_array, to_non_empty_array,
    to_non_empty_json_object, to_non_empty_plain_object, to_object, to_plain_object,
};
pub use primitive::{
    as_number, as_string, as_true, is_boolean, is_defined, is_falsy, is_non_empty_string, is_number,
    is_string, is_true, is_truthy, to_boolean, to_falsy, to_non_empty_string, to_number, to_string,
    to_true, to_truthy,
};
pub use select::{select_entries_by, select_true_entries};
