//! Substring primitives: prefix, anywhere and suffix containment/replacement.
//!
//! The empty substring is contained everywhere, so replacing it at the
//! prefix prepends, at the suffix appends, and anywhere inserts before the
//! first character (or between every character with [`Occurrence::All`]).

use crate::rewrite::{Occurrence, Position};

/// True if `s` starts with `sub`.
pub fn contains_prefix(s: &str, sub: &str) -> bool {
    s.starts_with(sub)
}

/// Replace the leading `old` of `s` with `new`; `s` is returned unchanged
/// when it does not start with `old`.
pub fn replace_prefix(s: &str, old: &str, new: &str) -> String {
    match s.strip_prefix(old) {
        Some(rest) => format!("{new}{rest}"),
        None => s.to_string(),
    }
}

/// True if `s` contains `sub` anywhere.
pub fn contains(s: &str, sub: &str) -> bool {
    s.contains(sub)
}

/// Replace occurrences of `old` in `s` with `new`.
pub fn replace(s: &str, old: &str, new: &str, occurrence: Occurrence) -> String {
    match occurrence {
        Occurrence::First => s.replacen(old, new, 1),
        Occurrence::All => s.replace(old, new),
    }
}

/// True if `s` ends with `sub`.
pub fn contains_suffix(s: &str, sub: &str) -> bool {
    s.ends_with(sub)
}

/// Replace the trailing `old` of `s` with `new`; `s` is returned unchanged
/// when it does not end with `old`.
pub fn replace_suffix(s: &str, old: &str, new: &str) -> String {
    match s.strip_suffix(old) {
        Some(rest) => format!("{rest}{new}"),
        None => s.to_string(),
    }
}

/// Position-dispatched containment test.
pub fn contains_at(s: &str, sub: &str, position: Position) -> bool {
    match position {
        Position::Prefix => contains_prefix(s, sub),
        Position::Anywhere => contains(s, sub),
        Position::Suffix => contains_suffix(s, sub),
    }
}

/// Position-dispatched replacement. `occurrence` only affects
/// [`Position::Anywhere`].
pub fn replace_at(s: &str, old: &str, new: &str, position: Position, occurrence: Occurrence) -> String {
    match position {
        Position::Prefix => replace_prefix(s, old, new),
        Position::Anywhere => replace(s, old, new, occurrence),
        Position::Suffix => replace_suffix(s, old, new),
    }
}
