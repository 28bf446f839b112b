//! Predicate registry: namespaces of name → predicate bindings.
//!
//! A [`Namespace`] is one scope (one defining module). Binding a name that
//! is already bound replaces it silently. A [`Registry`] groups namespaces
//! by id for callers that manage several scopes.
//!
//! Namespaces are populated during an initialization phase through `&mut`
//! access and are read-only afterwards; no internal locking is provided.

use std::collections::BTreeMap;

use crate::error::{OakError, Result};
use crate::inverse::InverseFactory;
use crate::predicate::{Predicate, Signature};
use crate::rewrite::RuleSet;
use crate::value::Value;

// ---------------------------------------------------------------------------
// Namespace
// ---------------------------------------------------------------------------

/// One scope of predicate bindings.
#[derive(Debug, Clone)]
pub struct Namespace {
    id: String,
    bindings: BTreeMap<String, Predicate>,
}

impl Namespace {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bindings: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Define a predicate in this namespace and return its handle.
    pub fn define<F>(&mut self, name: impl Into<String>, signature: Signature, test: F) -> Predicate
    where
        F: Fn(&[&Value]) -> bool + Send + Sync + 'static,
    {
        let predicate = Predicate::new(self.id.clone(), name, signature, test);
        self.register(predicate.clone());
        predicate
    }

    /// Generate and register the logical inverse of `predicate`, returning
    /// the inverse's handle.
    pub fn with_negation(&mut self, predicate: &Predicate, rules: &RuleSet) -> Result<Predicate> {
        InverseFactory::new(rules.clone()).negate(self, predicate)
    }

    /// Bind `predicate` under its own name, returning the binding it replaced.
    pub fn register(&mut self, predicate: Predicate) -> Option<Predicate> {
        let name = predicate.name().to_string();
        let previous = self.bindings.insert(name.clone(), predicate);
        if previous.is_some() {
            log::debug!("rebound {}.{}", self.id, name);
        } else {
            log::debug!("registered {}.{}", self.id, name);
        }
        previous
    }

    /// Look up a binding.
    pub fn resolve(&self, name: &str) -> Result<&Predicate> {
        self.bindings.get(name).ok_or_else(|| OakError::NotFound {
            namespace: self.id.clone(),
            name: name.to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Namespaces keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    namespaces: BTreeMap<String, Namespace>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully built namespace, returning any namespace it replaced.
    pub fn insert(&mut self, namespace: Namespace) -> Option<Namespace> {
        self.namespaces.insert(namespace.id().to_string(), namespace)
    }

    pub fn namespace(&self, id: &str) -> Option<&Namespace> {
        self.namespaces.get(id)
    }

    /// Mutable access to a namespace, created empty on first use.
    pub fn namespace_mut(&mut self, id: &str) -> &mut Namespace {
        self.namespaces
            .entry(id.to_string())
            .or_insert_with(|| Namespace::new(id))
    }

    /// Bind `predicate` in `namespace` under its own name.
    pub fn register(&mut self, namespace: &str, predicate: Predicate) -> Option<Predicate> {
        self.namespace_mut(namespace).register(predicate)
    }

    /// Look up `name` in `namespace`.
    pub fn resolve(&self, namespace: &str, name: &str) -> Result<&Predicate> {
        self.namespaces
            .get(namespace)
            .ok_or_else(|| OakError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })?
            .resolve(name)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
