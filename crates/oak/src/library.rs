//! Predicate library: one `is_<kind>` per [`Kind`], plus `is_of` and
//! `is_none`, each paired with its generated inverse.
//!
//! ```
//! let oak = oak::library::build().unwrap();
//! let isnt_list = oak.resolve("isnt_list").unwrap();
//! assert!(isnt_list.test("x").unwrap());
//! ```

use crate::error::Result;
use crate::inverse::InverseFactory;
use crate::kind::Kind;
use crate::predicate::Signature;
use crate::registry::Namespace;
use crate::rewrite::RuleSet;
use crate::value::Value;

/// Id of the library namespace.
pub const NAMESPACE: &str = "oak";

/// Kinds that get an `is_<kind>` predicate, in definition order.
pub const KIND_TABLE: &[Kind] = &Kind::ALL;

/// Build the library namespace with the default rule set.
pub fn build() -> Result<Namespace> {
    build_with(RuleSet::default())
}

/// Build the library namespace, naming inverses with `rules`.
pub fn build_with(rules: RuleSet) -> Result<Namespace> {
    let factory = InverseFactory::new(rules);
    let mut ns = Namespace::new(NAMESPACE);

    let of = ns.define("is_of", Signature::new(["x", "kinds"]), |p| is_of(p[0], p[1]));
    factory.wrap(&mut ns, of)?;

    let none = ns.define("is_none", Signature::unary("x"), |p| {
        matches!(p[0], Value::None)
    });
    factory.wrap(&mut ns, none)?;

    for &kind in KIND_TABLE {
        let predicate = ns.define(format!("is_{}", kind.name()), Signature::unary("x"), move |p| {
            kind.matches(p[0])
        });
        factory.wrap(&mut ns, predicate)?;
    }

    log::debug!("built namespace '{}' with {} predicates", ns.id(), ns.len());
    Ok(ns)
}

/// True iff `x` belongs to `kinds`: a single `Value::Type`, or a tuple,
/// list, set or frozenset (possibly nested) of them matched as a
/// disjunction. Any other `kinds` value, an empty collection included,
/// gives `false`.
pub fn is_of(x: &Value, kinds: &Value) -> bool {
    match kinds {
        Value::Type(kind) => kind.matches(x),
        Value::Tuple(options)
        | Value::List(options)
        | Value::Set(options)
        | Value::FrozenSet(options) => options.iter().any(|k| is_of(x, k)),
        _ => false,
    }
}
