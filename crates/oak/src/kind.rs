//! Closed set of value kinds and their membership tests.
//!
//! Concrete kinds test the nominal shape of a value; a value also belongs to
//! the kinds it specializes (`bool` is an `int`, a `Counter` is a `dict`).
//! Structural kinds (`Hashable`, `Sequence`, `Mapping`, ...) test the
//! capabilities a shape offers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OakError;
use crate::value::Value;

/// A classification category a predicate tests membership in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Kind {
    // Builtin shapes
    Bool,
    ByteArray,
    Bytes,
    Complex,
    Dict,
    Float,
    FrozenSet,
    Int,
    List,
    Range,
    Set,
    Slice,
    Str,
    Tuple,
    Type,

    // Specialized collections
    Deque,
    Counter,
    OrderedDict,
    DefaultDict,
    ChainMap,
    UserDict,
    UserList,
    UserString,

    // Structural kinds
    Container,
    Hashable,
    Iterable,
    Reversible,
    Sized,
    Collection,
    Sequence,
    MutableSequence,
    ByteString,
    AbstractSet,
    MutableSet,
    Mapping,
    MutableMapping,
}

impl Kind {
    /// Every kind, in library table order.
    pub const ALL: [Kind; 36] = [
        Kind::Bool,
        Kind::ByteArray,
        Kind::Bytes,
        Kind::Complex,
        Kind::Dict,
        Kind::Float,
        Kind::FrozenSet,
        Kind::Int,
        Kind::List,
        Kind::Range,
        Kind::Set,
        Kind::Slice,
        Kind::Str,
        Kind::Tuple,
        Kind::Type,
        Kind::Deque,
        Kind::Counter,
        Kind::OrderedDict,
        Kind::DefaultDict,
        Kind::ChainMap,
        Kind::UserDict,
        Kind::UserList,
        Kind::UserString,
        Kind::Container,
        Kind::Hashable,
        Kind::Iterable,
        Kind::Reversible,
        Kind::Sized,
        Kind::Collection,
        Kind::Sequence,
        Kind::MutableSequence,
        Kind::ByteString,
        Kind::AbstractSet,
        Kind::MutableSet,
        Kind::Mapping,
        Kind::MutableMapping,
    ];

    /// Stable name used to build predicate names (`is_<name>`).
    ///
    /// Builtin shapes are lowercase, collection and structural kinds are
    /// capitalized, so `set` (the concrete shape) and `Set` (anything
    /// set-like) stay distinct.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::ByteArray => "bytearray",
            Kind::Bytes => "bytes",
            Kind::Complex => "complex",
            Kind::Dict => "dict",
            Kind::Float => "float",
            Kind::FrozenSet => "frozenset",
            Kind::Int => "int",
            Kind::List => "list",
            Kind::Range => "range",
            Kind::Set => "set",
            Kind::Slice => "slice",
            Kind::Str => "str",
            Kind::Tuple => "tuple",
            Kind::Type => "type",
            Kind::Deque => "Deque",
            Kind::Counter => "Counter",
            Kind::OrderedDict => "OrderedDict",
            Kind::DefaultDict => "DefaultDict",
            Kind::ChainMap => "ChainMap",
            Kind::UserDict => "UserDict",
            Kind::UserList => "UserList",
            Kind::UserString => "UserString",
            Kind::Container => "Container",
            Kind::Hashable => "Hashable",
            Kind::Iterable => "Iterable",
            Kind::Reversible => "Reversible",
            Kind::Sized => "Sized",
            Kind::Collection => "Collection",
            Kind::Sequence => "Sequence",
            Kind::MutableSequence => "MutableSequence",
            Kind::ByteString => "ByteString",
            Kind::AbstractSet => "Set",
            Kind::MutableSet => "MutableSet",
            Kind::Mapping => "Mapping",
            Kind::MutableMapping => "MutableMapping",
        }
    }

    /// True iff `value` belongs to this kind. Never fails: any value outside
    /// the kind, `Value::None` included, is simply `false`.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Kind::Bool => matches!(value, Value::Bool(_)),
            Kind::ByteArray => matches!(value, Value::ByteArray(_)),
            Kind::Bytes => matches!(value, Value::Bytes(_)),
            Kind::Complex => matches!(value, Value::Complex { .. }),
            Kind::Dict => is_dict(value),
            Kind::Float => matches!(value, Value::Float(_)),
            Kind::FrozenSet => matches!(value, Value::FrozenSet(_)),
            Kind::Int => matches!(value, Value::Int(_) | Value::Bool(_)),
            Kind::List => matches!(value, Value::List(_)),
            Kind::Range => matches!(value, Value::Range { .. }),
            Kind::Set => matches!(value, Value::Set(_)),
            Kind::Slice => matches!(value, Value::Slice { .. }),
            Kind::Str => matches!(value, Value::Str(_)),
            Kind::Tuple => matches!(value, Value::Tuple(_)),
            Kind::Type => matches!(value, Value::Type(_)),
            Kind::Deque => matches!(value, Value::Deque(_)),
            Kind::Counter => matches!(value, Value::Counter(_)),
            Kind::OrderedDict => matches!(value, Value::OrderedDict(_)),
            Kind::DefaultDict => matches!(value, Value::DefaultDict { .. }),
            Kind::ChainMap => matches!(value, Value::ChainMap(_)),
            Kind::UserDict => matches!(value, Value::UserDict(_)),
            Kind::UserList => matches!(value, Value::UserList(_)),
            Kind::UserString => matches!(value, Value::UserString(_)),
            Kind::Hashable => matches!(
                value,
                Value::None
                    | Value::Bool(_)
                    | Value::Int(_)
                    | Value::Float(_)
                    | Value::Complex { .. }
                    | Value::Str(_)
                    | Value::UserString(_)
                    | Value::Bytes(_)
                    | Value::Tuple(_)
                    | Value::FrozenSet(_)
                    | Value::Range { .. }
                    | Value::Type(_)
            ),
            Kind::Container | Kind::Iterable | Kind::Sized | Kind::Collection => {
                value.size().is_some()
            }
            Kind::Reversible => is_sequence(value) || is_dict(value),
            Kind::Sequence => is_sequence(value),
            Kind::MutableSequence => matches!(
                value,
                Value::List(_) | Value::ByteArray(_) | Value::Deque(_) | Value::UserList(_)
            ),
            Kind::ByteString => matches!(value, Value::Bytes(_) | Value::ByteArray(_)),
            Kind::AbstractSet => matches!(value, Value::Set(_) | Value::FrozenSet(_)),
            Kind::MutableSet => matches!(value, Value::Set(_)),
            Kind::Mapping | Kind::MutableMapping => {
                is_dict(value) || matches!(value, Value::ChainMap(_) | Value::UserDict(_))
            }
        }
    }
}

/// `dict` itself and its subclasses.
fn is_dict(value: &Value) -> bool {
    matches!(
        value,
        Value::Dict(_) | Value::Counter(_) | Value::OrderedDict(_) | Value::DefaultDict { .. }
    )
}

fn is_sequence(value: &Value) -> bool {
    matches!(
        value,
        Value::Str(_)
            | Value::Bytes(_)
            | Value::ByteArray(_)
            | Value::List(_)
            | Value::Tuple(_)
            | Value::Range { .. }
            | Value::Deque(_)
            | Value::UserList(_)
            | Value::UserString(_)
    )
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Kind {
    type Err = OakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Kind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| OakError::UnknownKind(s.to_string()))
    }
}

impl TryFrom<String> for Kind {
    type Error = OakError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Kind> for String {
    fn from(k: Kind) -> Self {
        k.name().to_string()
    }
}
