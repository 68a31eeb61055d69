use std::borrow::Cow;

use tracing::debug;

use crate::stringify::{stringify, to_text};
use crate::value::JsValue;

/// Renders any value as text for showing it to a user.
///
/// Strings are returned unchanged (borrowed), `null` and `undefined` become
/// `""`, and everything else is pretty-printed as JSON with a 2-space indent.
/// Values JSON cannot represent fall back to their text conversion.
///
/// # Examples
///
/// ```
/// use inert_util::{display, JsValue};
/// use serde_json::json;
///
/// assert_eq!(display(&JsValue::from("hello")), "hello");
/// assert_eq!(display(&JsValue::Null), "");
/// assert_eq!(display(&JsValue::from(json!({"a": 1}))), "{\n  \"a\": 1\n}");
/// ```
pub fn display(x: &JsValue) -> Cow<'_, str> {
    match x {
        JsValue::String(s) => Cow::Borrowed(s),
        JsValue::Undefined | JsValue::Null => Cow::Borrowed(""),
        _ => match stringify(x, 2) {
            Ok(Some(json)) => Cow::Owned(json),
            Ok(None) => Cow::Owned(to_text(x)),
            Err(err) => {
                debug!(error = %err, "display: JSON serialization failed, using text conversion");
                Cow::Owned(to_text(x))
            }
        },
    }
}
