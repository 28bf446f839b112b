//! Inverse factory: generates and registers the logical inverse of a
//! predicate.
//!
//! The inverse is named by [`rewrite::derive`], takes exactly the same
//! arguments as the original, returns the negation of the original's result,
//! and is bound in the namespace that owns the original. An existing binding
//! at the derived name is replaced.

use crate::error::{OakError, Result};
use crate::predicate::Predicate;
use crate::registry::Namespace;
use crate::rewrite::{self, RuleSet};

/// Generates inverses under a fixed rule set.
#[derive(Debug, Clone, Default)]
pub struct InverseFactory {
    rules: RuleSet,
}

impl InverseFactory {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Register the inverse of `predicate` in `namespace` and hand back the
    /// original unchanged.
    pub fn wrap(&self, namespace: &mut Namespace, predicate: Predicate) -> Result<Predicate> {
        self.negate(namespace, &predicate)?;
        Ok(predicate)
    }

    /// Register the inverse of `predicate` in `namespace` and return it.
    pub fn negate(&self, namespace: &mut Namespace, predicate: &Predicate) -> Result<Predicate> {
        if predicate.namespace() != namespace.id() {
            return Err(OakError::ForeignNamespace {
                predicate: predicate.qualified_name(),
                expected: predicate.namespace().to_string(),
                actual: namespace.id().to_string(),
            });
        }

        let inverse = inverse_of(predicate, &self.rules)?;
        log::debug!(
            "derived {} as inverse of {}",
            inverse.name(),
            predicate.qualified_name()
        );
        namespace.register(inverse.clone());
        Ok(inverse)
    }
}

/// Register the inverse of `predicate` under `rules`, returning the original.
pub fn wrap(namespace: &mut Namespace, predicate: Predicate, rules: &RuleSet) -> Result<Predicate> {
    InverseFactory::new(rules.clone()).wrap(namespace, predicate)
}

/// Build (without registering) the inverse of `predicate`.
pub fn inverse_of(predicate: &Predicate, rules: &RuleSet) -> Result<Predicate> {
    let name = rewrite::derive(predicate.name(), rules)?;
    let doc = format!("The logical inverse of `{}`.", predicate.qualified_name());
    let original = predicate.clone();

    Ok(Predicate::from_fn(
        predicate.namespace(),
        name,
        predicate.signature().clone(),
        move |args| original.call(args).map(|result| !result),
    )
    .with_doc(doc))
}
