//! Oak (Of A Kind): kind predicates with generated logical inverses.
//!
//! Provides a rule-driven name rewrite engine, a factory that derives and
//! registers the logical inverse of any predicate, explicit predicate
//! namespaces, and a library of `is_<kind>` / `isnt_<kind>` predicates over
//! dynamically shaped values.

pub mod error;
pub mod inverse;
pub mod kind;
pub mod library;
pub mod predicate;
pub mod registry;
pub mod rewrite;
pub mod twine;
pub mod value;

// Re-export primary types
pub use error::{OakError, Result};
pub use inverse::InverseFactory;
pub use kind::Kind;
pub use predicate::{Args, Predicate, Signature};
pub use registry::{Namespace, Registry};
pub use rewrite::{derive, Occurrence, Position, Rule, RuleSet};
pub use value::Value;
