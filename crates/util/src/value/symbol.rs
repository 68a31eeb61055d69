use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct SymbolData {
    description: Option<String>,
}

/// A unique symbol value.
///
/// Every call to [`JsSymbol::new`] creates a distinct symbol, even when the
/// descriptions match. Clones share the identity of the original.
#[derive(Clone)]
pub struct JsSymbol(Rc<SymbolData>);

impl JsSymbol {
    pub fn new(description: impl Into<String>) -> Self {
        Self(Rc::new(SymbolData {
            description: Some(description.into()),
        }))
    }

    /// Creates a symbol without a description, like `Symbol()`.
    pub fn anonymous() -> Self {
        Self(Rc::new(SymbolData { description: None }))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Returns true if both handles refer to the same symbol.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for JsSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for JsSymbol {}

impl std::hash::Hash for JsSymbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Display for JsSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

impl fmt::Debug for JsSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_unique() {
        let a = JsSymbol::new("key");
        let b = JsSymbol::new("key");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_display() {
        assert_eq!(JsSymbol::new("key").to_string(), "Symbol(key)");
        assert_eq!(JsSymbol::anonymous().to_string(), "Symbol()");
    }
}
