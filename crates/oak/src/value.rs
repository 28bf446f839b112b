//! Dynamic values classified by kind predicates.

use serde::{Deserialize, Serialize};

use crate::kind::Kind;

/// A dynamically shaped value.
///
/// Mapping variants keep their entries as ordered pairs; set variants keep
/// their members in insertion order. Neither deduplicates, since
/// classification only looks at the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The canonical "no value" marker.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex { re: f64, im: f64 },
    Str(String),
    /// Immutable byte string.
    Bytes(Vec<u8>),
    /// Mutable byte buffer.
    ByteArray(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    FrozenSet(Vec<Value>),
    Dict(Vec<(Value, Value)>),
    Range { start: i64, stop: i64, step: i64 },
    Slice {
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    },
    /// Double-ended queue.
    Deque(Vec<Value>),
    /// Multiset: element to count.
    Counter(Vec<(Value, i64)>),
    OrderedDict(Vec<(Value, Value)>),
    /// Mapping with a default factory, identified by the kind it produces.
    DefaultDict {
        default: Option<Kind>,
        entries: Vec<(Value, Value)>,
    },
    /// Ordered view over several mappings; lookups search them front to back.
    ChainMap(Vec<Vec<(Value, Value)>>),
    /// Mapping wrapper that is not itself a `Dict`.
    UserDict(Vec<(Value, Value)>),
    UserList(Vec<Value>),
    UserString(String),
    /// A kind used as a value, e.g. the second argument of `is_of`.
    Type(Kind),
}

impl Value {
    /// Build a string value.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Build a list value.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// Build a tuple value.
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    /// Build a tuple of kinds, the disjunction form accepted by `is_of`.
    pub fn kinds(kinds: impl IntoIterator<Item = Kind>) -> Self {
        Value::Tuple(kinds.into_iter().map(Value::Type).collect())
    }

    /// Short name of the value's concrete shape, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Complex { .. } => "complex",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::ByteArray(_) => "bytearray",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::FrozenSet(_) => "frozenset",
            Value::Dict(_) => "dict",
            Value::Range { .. } => "range",
            Value::Slice { .. } => "slice",
            Value::Deque(_) => "Deque",
            Value::Counter(_) => "Counter",
            Value::OrderedDict(_) => "OrderedDict",
            Value::DefaultDict { .. } => "DefaultDict",
            Value::ChainMap(_) => "ChainMap",
            Value::UserDict(_) => "UserDict",
            Value::UserList(_) => "UserList",
            Value::UserString(_) => "UserString",
            Value::Type(_) => "type",
        }
    }

    /// Number of elements for sized values; `None` otherwise.
    pub fn size(&self) -> Option<usize> {
        match self {
            Value::Str(s) | Value::UserString(s) => Some(s.chars().count()),
            Value::Bytes(b) | Value::ByteArray(b) => Some(b.len()),
            Value::List(v)
            | Value::Tuple(v)
            | Value::Set(v)
            | Value::FrozenSet(v)
            | Value::Deque(v)
            | Value::UserList(v) => Some(v.len()),
            Value::Dict(m) | Value::OrderedDict(m) | Value::UserDict(m) => Some(m.len()),
            Value::ChainMap(maps) => Some(chain_len(maps)),
            Value::DefaultDict { entries, .. } => Some(entries.len()),
            Value::Counter(c) => Some(c.len()),
            Value::Range { start, stop, step } => Some(range_len(*start, *stop, *step)),
            _ => None,
        }
    }
}

/// Distinct keys across every map of a chain.
fn chain_len(maps: &[Vec<(Value, Value)>]) -> usize {
    let mut keys: Vec<&Value> = Vec::new();
    for (key, _) in maps.iter().flatten() {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys.len()
}

fn range_len(start: i64, stop: i64, step: i64) -> usize {
    if step == 0 {
        return 0;
    }
    let span = if step > 0 {
        stop.saturating_sub(start)
    } else {
        start.saturating_sub(stop)
    };
    if span <= 0 {
        return 0;
    }
    let step = step.unsigned_abs();
    ((span as u64 + step - 1) / step) as usize
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Dict(
                map.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Kind> for Value {
    fn from(k: Kind) -> Self {
        Value::Type(k)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::None)
    }
}
