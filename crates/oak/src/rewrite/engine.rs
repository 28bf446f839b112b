//! Name rewrite engine: derives a predicate's inverse name from a rule set.

use crate::error::{OakError, Result};
use crate::twine;

use super::types::RuleSet;

/// Derive a new name from `name` by evaluating `rules` in order.
///
/// Every rule is tested against the original `name`, never against an
/// earlier rule's output. A matching rule with `stop_after` decides the name
/// immediately; a matching rule without it records a candidate that a later
/// match replaces. Fails with [`OakError::NameDerivation`] when no rule
/// matches.
pub fn derive(name: &str, rules: &RuleSet) -> Result<String> {
    let mut candidate: Option<String> = None;

    for rule in rules {
        if !twine::contains_at(name, &rule.old, rule.position) {
            log::trace!("rule {} '{}' skipped for '{}'", rule.position, rule.old, name);
            continue;
        }

        let derived = twine::replace_at(name, &rule.old, &rule.new, rule.position, rule.occurrence);
        log::trace!(
            "rule {} '{}' -> '{}' rewrote '{}' to '{}'",
            rule.position,
            rule.old,
            rule.new,
            name,
            derived
        );

        if rule.stop_after {
            return Ok(derived);
        }
        candidate = Some(derived);
    }

    candidate.ok_or_else(|| OakError::NameDerivation {
        name: name.to_string(),
    })
}
