//! The JSON value tree.
//!
//! [`Value`] is a plain tagged union that owns its payload. It is built to be
//! walked and edited without checking the active variant first:
//!
//! - **Read-only access never fails.** `v[0]`, `v["key"]`, `get_string()` and
//!   friends return a shared empty value on type mismatch ([`Value::EMPTY`],
//!   [`EMPTY_ARRAY`], [`EMPTY_OBJECT`], `""`, `0.0`, `false`).
//! - **Mutable access promotes.** Writing through `v[3]` turns a non-array into
//!   an array (growing it with nulls), writing through `v["key"]` turns a
//!   non-object into an object. The previous payload is dropped.
//! - **Removal on the wrong type is a no-op.** `pop`, `erase` and `erase_key`
//!   leave scalars untouched.
//!
//! # Example
//! ```
//! use jvalue_core::Value;
//!
//! let mut v = Value::default();
//! v["name"] = "probe".into();
//! v["ports"][2] = 8080.into();
//!
//! assert!(v.is_object());
//! assert_eq!(v["ports"].size(), 3);
//! assert!(v["ports"][0].is_null());
//! assert_eq!(v["missing"]["deeper"][7], Value::EMPTY);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::ParseError;
use crate::{parser, serializer};

/// Ordered sequence of values.
pub type Array = Vec<Value>;

/// String-keyed map of values. Key order carries no meaning; a `BTreeMap`
/// keeps serialized output deterministic.
pub type Object = BTreeMap<String, Value>;

/// Shared empty array returned by [`Value::get_array`] on type mismatch.
pub static EMPTY_ARRAY: Array = Vec::new();

/// Shared empty object returned by [`Value::get_object`] on type mismatch.
pub static EMPTY_OBJECT: Object = BTreeMap::new();

static NULL: Value = Value::Null;

/// The active variant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        };
        f.write_str(name)
    }
}

/// A JSON value. Numbers are always stored as `f64`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// The null value, also what read-only indexing yields on a miss.
    pub const EMPTY: Value = Value::Null;

    // ------------------------------------------------------------------
    // Type inspection
    // ------------------------------------------------------------------

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    // ------------------------------------------------------------------
    // Typed getters (safe defaults on mismatch)
    // ------------------------------------------------------------------

    /// The boolean payload, or `false`.
    pub fn get_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            _ => false,
        }
    }

    /// The numeric payload, or `0.0`.
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// The string payload, or `""`.
    pub fn get_string(&self) -> &str {
        match self {
            Value::String(s) => s,
            _ => "",
        }
    }

    /// The array payload, or the shared [`EMPTY_ARRAY`].
    pub fn get_array(&self) -> &Array {
        match self {
            Value::Array(arr) => arr,
            _ => &EMPTY_ARRAY,
        }
    }

    /// The object payload, or the shared [`EMPTY_OBJECT`].
    pub fn get_object(&self) -> &Object {
        match self {
            Value::Object(map) => map,
            _ => &EMPTY_OBJECT,
        }
    }

    /// Whether this is an object holding `key`.
    pub fn contains(&self, key: &str) -> bool {
        match self {
            Value::Object(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// Look up an array element or object entry without promoting or
    /// falling back to [`Value::EMPTY`].
    ///
    /// ```
    /// # use jvalue_core::Value;
    /// let v: Value = "[10, 20]".parse().unwrap();
    /// assert_eq!(v.get(1), Some(&Value::from(20)));
    /// assert_eq!(v.get(2), None);
    /// assert_eq!(v.get("key"), None);
    /// ```
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    /// Mutable counterpart of [`Value::get`]. Never promotes.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }

    // ------------------------------------------------------------------
    // Whole-value assignment
    // ------------------------------------------------------------------

    /// Replace this value, dropping the previous payload.
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }

    /// Move the value out, leaving null behind.
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    pub fn set_empty_array(&mut self) {
        *self = Value::Array(Array::new());
    }

    pub fn set_empty_object(&mut self) {
        *self = Value::Object(Object::new());
    }

    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    // ------------------------------------------------------------------
    // Array mutation
    // ------------------------------------------------------------------

    /// Append a value. Becomes an array if it was not one.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.array_mut().push(value.into());
    }

    /// Insert a value at `index`, shifting later elements. An index past the
    /// end appends. Becomes an array if it was not one.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
        let arr = self.array_mut();
        let index = index.min(arr.len());
        arr.insert(index, value.into());
    }

    /// Remove and return the last element. No-op on non-arrays.
    pub fn pop(&mut self) -> Option<Value> {
        match self {
            Value::Array(arr) => arr.pop(),
            _ => None,
        }
    }

    /// Remove `count` elements starting at `pos`, clamped to the array
    /// bounds. No-op on non-arrays.
    pub fn erase(&mut self, pos: usize, count: usize) {
        if let Value::Array(arr) = self {
            let start = pos.min(arr.len());
            let end = pos.saturating_add(count).min(arr.len());
            arr.drain(start..end);
        }
    }

    /// Grow (with nulls) or truncate to `new_len` elements. Becomes an array
    /// if it was not one.
    pub fn resize(&mut self, new_len: usize) {
        self.array_mut().resize(new_len, Value::Null);
    }

    // ------------------------------------------------------------------
    // Object mutation
    // ------------------------------------------------------------------

    /// Insert or replace an entry. Becomes an object if it was not one.
    pub fn insert_entry(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.object_mut().insert(key.into(), value.into());
    }

    /// Remove an entry and return it. No-op on non-objects or absent keys.
    pub fn erase_key(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.remove(key),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Container queries
    // ------------------------------------------------------------------

    /// Empty an array or object in place, keeping its type. No-op on scalars.
    pub fn clear(&mut self) {
        match self {
            Value::Array(arr) => arr.clear(),
            Value::Object(map) => map.clear(),
            _ => {}
        }
    }

    /// Element or entry count; `0` for scalars.
    pub fn size(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    /// True only for an array or object with no elements. Scalars, including
    /// null, are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Array(arr) => arr.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Text conversion
    // ------------------------------------------------------------------

    /// Parse `text` and replace this value with the result.
    ///
    /// Returns `false` on malformed input and leaves the value null. Use
    /// [`crate::parse`] for the failure reason.
    pub fn from_string(&mut self, text: &str) -> bool {
        match parser::parse(text) {
            Ok(parsed) => {
                *self = parsed;
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, len = text.len(), "JSON parse failed");
                self.set_null();
                false
            }
        }
    }

    /// Serialize to text. `spacing == 0` is compact; otherwise each nesting
    /// level is indented by `spacing` spaces.
    pub fn to_json(&self, spacing: usize) -> String {
        let mut out = String::new();
        self.write_json(&mut out, spacing, 0);
        out
    }

    /// Append the serialized form to `dest`, as if nested `indent` levels deep.
    pub fn write_json(&self, dest: &mut String, spacing: usize, indent: usize) {
        serializer::write_value(dest, self, spacing, indent);
    }

    // ------------------------------------------------------------------
    // Promotion
    // ------------------------------------------------------------------

    fn array_mut(&mut self) -> &mut Array {
        if !self.is_array() {
            tracing::trace!(from = %self.value_type(), "promoting value to array");
            self.set_empty_array();
        }
        match self {
            Value::Array(arr) => arr,
            _ => unreachable!("value was just promoted to an array"),
        }
    }

    fn object_mut(&mut self) -> &mut Object {
        if !self.is_object() {
            tracing::trace!(from = %self.value_type(), "promoting value to object");
            self.set_empty_object();
        }
        match self {
            Value::Object(map) => map,
            _ => unreachable!("value was just promoted to an object"),
        }
    }
}

// ----------------------------------------------------------------------
// Indexing
// ----------------------------------------------------------------------

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// Types that can index into a [`Value`]: `usize` for arrays, string types
/// for objects. Sealed.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value>;

    /// Promote `v` to the container this index addresses and return the slot,
    /// creating it if needed.
    #[doc(hidden)]
    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        match v {
            Value::Array(arr) => arr.get(*self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        match v {
            Value::Array(arr) => arr.get_mut(*self),
            _ => None,
        }
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value {
        let arr = v.array_mut();
        if *self >= arr.len() {
            arr.resize(*self + 1, Value::Null);
        }
        &mut arr[*self]
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        match v {
            Value::Object(map) => map.get(self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        match v {
            Value::Object(map) => map.get_mut(self),
            _ => None,
        }
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value {
        v.object_mut().entry(self.to_owned()).or_default()
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        self.as_str().index_into_mut(v)
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value {
        self.as_str().index_or_insert(v)
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        (**self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Option<&'v mut Value> {
        (**self).index_into_mut(v)
    }

    fn index_or_insert<'v>(&self, v: &'v mut Value) -> &'v mut Value {
        (**self).index_or_insert(v)
    }
}

impl<I: ValueIndex> Index<I> for Value {
    type Output = Value;

    /// Read-only lookup. Misses and type mismatches yield [`Value::EMPTY`].
    fn index(&self, index: I) -> &Value {
        index.index_into(self).unwrap_or(&NULL)
    }
}

impl<I: ValueIndex> IndexMut<I> for Value {
    /// Promoting lookup: see the module docs.
    fn index_mut(&mut self, index: I) -> &mut Value {
        index.index_or_insert(self)
    }
}

// ----------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Array> for Value {
    fn from(arr: Array) -> Self {
        Value::Array(arr)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<It: IntoIterator<Item = (K, V)>>(iter: It) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl fmt::Display for Value {
    /// Pretty-printed with [`serializer::DEFAULT_SPACING`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json(serializer::DEFAULT_SPACING))
    }
}

// ----------------------------------------------------------------------
// Comparison with primitives
// ----------------------------------------------------------------------

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

macro_rules! eq_number {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Value::Number(n) if *n == *other as f64)
                }
            }
        )*
    };
}

eq_number!(i32, i64, u32, u64, usize, f64);
