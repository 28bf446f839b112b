//! Name rewriting: derives the name of a predicate's logical inverse.
//!
//! The rewrite module provides:
//! - Rules matching a substring at a prefix, anywhere, or suffix position
//! - Ordered rule sets with a default `is_` → `isnt_` / `not_` fallback
//! - JSON rule-set configuration files
//! - The derivation engine

pub mod engine;
pub mod types;

pub use types::{Occurrence, Position, Rule, RuleSet};

pub use engine::derive;
