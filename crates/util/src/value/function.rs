use std::fmt;
use std::rc::Rc;

use super::JsValue;

/// Signature of a function body: receives `this` and the arguments, returns
/// the result or the thrown value.
pub type NativeFn = dyn Fn(&JsValue, &[JsValue]) -> Result<JsValue, JsValue>;

struct FunctionData {
    name: String,
    body: Box<NativeFn>,
}

/// A callable value. Its `typeof` is `"function"`, so the object guards
/// never admit it.
#[derive(Clone)]
pub struct JsFunction(Rc<FunctionData>);

impl JsFunction {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> Result<JsValue, JsValue> + 'static,
    {
        Self(Rc::new(FunctionData {
            name: name.into(),
            body: Box::new(body),
        }))
    }

    /// A function that ignores its arguments and returns `value`.
    pub fn constant(name: impl Into<String>, value: JsValue) -> Self {
        Self::new(name, move |_, _| Ok(value.clone()))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Invokes the function with `this` bound to `this_arg`.
    pub fn call(&self, this_arg: &JsValue, args: &[JsValue]) -> Result<JsValue, JsValue> {
        (self.0.body)(this_arg, args)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for JsFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name())
    }
}
