use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::{JsSymbol, JsValue};

/// Property key: a string or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(JsSymbol),
}

impl PropertyKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::String(s)
    }
}

impl From<JsSymbol> for PropertyKey {
    fn from(s: JsSymbol) -> Self {
        PropertyKey::Symbol(s)
    }
}

impl From<&JsSymbol> for PropertyKey {
    fn from(s: &JsSymbol) -> Self {
        PropertyKey::Symbol(s.clone())
    }
}

/// Built-in behavior attached to an object.
///
/// None of these make an object an array: they are all "plain objects" to the
/// guards, distinguished only by what they serialize and print as.
#[derive(Debug, Clone, Default)]
pub enum ObjectKind {
    #[default]
    Ordinary,
    /// Milliseconds since the Unix epoch; `NaN` is an invalid date.
    Date(f64),
    RegExp { source: String, flags: String },
    Map(Vec<(JsValue, JsValue)>),
    Set(Vec<JsValue>),
    /// Array-like numeric storage, e.g. `Int8Array`. Its indices are own
    /// enumerable keys, but it is not an array.
    TypedArray(Vec<f64>),
}

#[derive(Debug, Clone)]
struct Property {
    value: JsValue,
    enumerable: bool,
}

#[derive(Default)]
struct ObjectData {
    kind: ObjectKind,
    proto: Option<JsObject>,
    props: IndexMap<PropertyKey, Property>,
}

impl ObjectData {
    /// Routes an index write on a typed array to its elements. Returns `false`
    /// when `key` is an ordinary property.
    fn write_element(&mut self, key: &PropertyKey, value: &JsValue) -> bool {
        let (ObjectKind::TypedArray(values), PropertyKey::String(key)) = (&mut self.kind, key) else {
            return false;
        };
        let Some(index) = array_index(key) else {
            return false;
        };
        if let Some(slot) = values.get_mut(index as usize) {
            *slot = element_number(value);
        }
        true
    }
}

/// Number conversion applied to values stored into a typed array.
fn element_number(value: &JsValue) -> f64 {
    match value {
        JsValue::Number(n) => *n,
        JsValue::Bool(b) => f64::from(u8::from(*b)),
        JsValue::Null => 0.0,
        JsValue::String(s) if s.trim().is_empty() => 0.0,
        JsValue::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// A shared, mutable object handle.
///
/// Own properties keep insertion order; [`JsObject::keys`] reports them in
/// the order `Object.keys` would (integer-like keys first, ascending).
#[derive(Clone, Default)]
pub struct JsObject(Rc<RefCell<ObjectData>>);

impl JsObject {
    /// Creates an ordinary object without a prototype.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an ordinary object inheriting from `proto`, like `Object.create`.
    pub fn create(proto: Option<&JsObject>) -> Self {
        Self(Rc::new(RefCell::new(ObjectData {
            proto: proto.cloned(),
            ..ObjectData::default()
        })))
    }

    pub fn with_kind(kind: ObjectKind) -> Self {
        Self(Rc::new(RefCell::new(ObjectData {
            kind,
            ..ObjectData::default()
        })))
    }

    pub fn date(millis: f64) -> Self {
        Self::with_kind(ObjectKind::Date(millis))
    }

    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self::with_kind(ObjectKind::RegExp {
            source: source.into(),
            flags: flags.into(),
        })
    }

    pub fn map_of(entries: Vec<(JsValue, JsValue)>) -> Self {
        Self::with_kind(ObjectKind::Map(entries))
    }

    pub fn set_of(values: Vec<JsValue>) -> Self {
        Self::with_kind(ObjectKind::Set(values))
    }

    pub fn typed_array(values: Vec<f64>) -> Self {
        Self::with_kind(ObjectKind::TypedArray(values))
    }

    /// Builds an ordinary object from `(key, value)` pairs.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<PropertyKey>,
        V: Into<JsValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let obj = Self::new();
        for (key, value) in entries {
            obj.set(key, value);
        }
        obj
    }

    pub fn kind(&self) -> ObjectKind {
        self.0.borrow().kind.clone()
    }

    pub fn prototype(&self) -> Option<JsObject> {
        self.0.borrow().proto.clone()
    }

    /// Assigns a property. New properties are enumerable; existing ones keep
    /// their enumerability.
    ///
    /// On a typed array, canonical index keys write into its element storage
    /// (converted to a number) and out-of-range indices are ignored.
    pub fn set(&self, key: impl Into<PropertyKey>, value: impl Into<JsValue>) {
        let mut data = self.0.borrow_mut();
        let key = key.into();
        let value = value.into();
        if data.write_element(&key, &value) {
            return;
        }
        match data.props.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().value = value,
            Entry::Vacant(entry) => {
                entry.insert(Property {
                    value,
                    enumerable: true,
                });
            }
        }
    }

    /// Defines (or redefines) an own property with explicit enumerability.
    pub fn define_property(
        &self,
        key: impl Into<PropertyKey>,
        value: impl Into<JsValue>,
        enumerable: bool,
    ) {
        let mut data = self.0.borrow_mut();
        let key = key.into();
        let value = value.into();
        if data.write_element(&key, &value) {
            return;
        }
        data.props.insert(key, Property { value, enumerable });
    }

    /// Reads a property, walking the prototype chain. Missing keys read as
    /// `undefined`.
    pub fn get(&self, key: impl Into<PropertyKey>) -> JsValue {
        let key = key.into();
        let mut current = Some(self.clone());
        while let Some(obj) = current {
            if let Some(value) = obj.get_own(&key) {
                return value;
            }
            current = obj.prototype();
        }
        JsValue::Undefined
    }

    /// Reads an own property, enumerable or not.
    pub fn get_own(&self, key: &PropertyKey) -> Option<JsValue> {
        let data = self.0.borrow();
        if let Some(prop) = data.props.get(key) {
            return Some(prop.value.clone());
        }
        match (&data.kind, key) {
            (ObjectKind::TypedArray(values), PropertyKey::String(s)) => array_index(s)
                .and_then(|i| values.get(i as usize))
                .map(|n| JsValue::Number(*n)),
            _ => None,
        }
    }

    pub fn has_own(&self, key: impl Into<PropertyKey>) -> bool {
        self.get_own(&key.into()).is_some()
    }

    /// Own enumerable string keys, in `Object.keys` order.
    pub fn keys(&self) -> Vec<String> {
        let data = self.0.borrow();
        let mut indices: Vec<(u32, String)> = Vec::new();
        let mut named: Vec<String> = Vec::new();
        if let ObjectKind::TypedArray(values) = &data.kind {
            indices.extend((0..values.len() as u32).map(|i| (i, i.to_string())));
        }
        for (key, prop) in &data.props {
            let PropertyKey::String(key) = key else {
                continue;
            };
            if !prop.enumerable {
                continue;
            }
            match array_index(key) {
                Some(i) => indices.push((i, key.clone())),
                None => named.push(key.clone()),
            }
        }
        indices.sort_by_key(|(i, _)| *i);
        indices.into_iter().map(|(_, key)| key).chain(named).collect()
    }

    /// Own enumerable string-keyed entries, in `Object.keys` order.
    pub fn entries(&self) -> Vec<(String, JsValue)> {
        self.keys()
            .into_iter()
            .map(|key| {
                let value = self
                    .get_own(&PropertyKey::String(key.clone()))
                    .unwrap_or(JsValue::Undefined);
                (key, value)
            })
            .collect()
    }

    /// All own keys including symbols and non-enumerable ones, in insertion order.
    pub fn own_property_keys(&self) -> Vec<PropertyKey> {
        self.0.borrow().props.keys().cloned().collect()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

/// Parses a canonical array index (`"0"`, `"17"`, never `"01"`).
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|i| *i != u32::MAX)
}

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsObject{}", crate::stringify::debug_repr(&JsValue::Object(self.clone())))
    }
}
