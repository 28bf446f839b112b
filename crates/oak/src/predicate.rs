//! Predicates: named boolean functions with a declared parameter list.
//!
//! A call supplies positional and keyword [`Args`]; they are bound to the
//! predicate's [`Signature`] before the test runs. Binding errors are the
//! only way a call can fail.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{OakError, Result};
use crate::value::Value;

// ---------------------------------------------------------------------------
// Args
// ---------------------------------------------------------------------------

/// Arguments of a predicate call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub positional: Vec<Value>,
    pub keyword: BTreeMap<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    /// Total number of supplied arguments.
    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const N: usize> From<[Value; N]> for Args {
    fn from(values: [Value; N]) -> Self {
        Self {
            positional: values.into(),
            keyword: BTreeMap::new(),
        }
    }
}

impl From<Vec<Value>> for Args {
    fn from(positional: Vec<Value>) -> Self {
        Self {
            positional,
            keyword: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// Ordered parameter names of a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    params: Vec<String>,
}

impl Signature {
    pub fn new<S: Into<String>>(params: impl IntoIterator<Item = S>) -> Self {
        Self {
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Single-parameter signature.
    pub fn unary(param: impl Into<String>) -> Self {
        Self {
            params: vec![param.into()],
        }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Bind `args` to the parameters, in parameter order.
    ///
    /// Positional arguments fill parameters left to right; the rest must
    /// come as keywords. Surplus positionals, unknown keywords, a parameter
    /// given twice, or a missing parameter are all errors.
    pub fn bind<'a>(&self, predicate: &str, args: &'a Args) -> Result<Vec<&'a Value>> {
        let fail = |reason: String| OakError::Arguments {
            predicate: predicate.to_string(),
            reason,
        };

        if args.positional.len() > self.params.len() {
            return Err(fail(format!(
                "takes {} positional argument(s) but {} were given",
                self.params.len(),
                args.positional.len()
            )));
        }

        if let Some(unknown) = args
            .keyword
            .keys()
            .find(|k| !self.params.iter().any(|p| p == *k))
        {
            return Err(fail(format!("unexpected keyword argument '{unknown}'")));
        }

        let mut bound = Vec::with_capacity(self.params.len());
        for (i, param) in self.params.iter().enumerate() {
            let keyword = args.keyword.get(param);
            match (args.positional.get(i), keyword) {
                (Some(_), Some(_)) => {
                    return Err(fail(format!("got multiple values for argument '{param}'")))
                }
                (Some(value), None) | (None, Some(value)) => bound.push(value),
                (None, None) => {
                    return Err(fail(format!("missing required argument '{param}'")))
                }
            }
        }

        Ok(bound)
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.params.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

/// Callable body of a predicate, operating on the raw call arguments.
pub type PredicateFn = dyn Fn(&Args) -> Result<bool> + Send + Sync;

/// A named, boolean-returning function owned by a namespace.
///
/// Cloning is cheap: clones share the same body.
#[derive(Clone)]
pub struct Predicate {
    name: String,
    namespace: String,
    signature: Signature,
    doc: Option<String>,
    body: Arc<PredicateFn>,
}

impl Predicate {
    /// Create a predicate whose `test` receives the bound parameters in
    /// signature order.
    pub fn new<F>(
        namespace: impl Into<String>,
        name: impl Into<String>,
        signature: Signature,
        test: F,
    ) -> Self
    where
        F: Fn(&[&Value]) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        let namespace = namespace.into();
        let qualified = format!("{namespace}.{name}");
        let bind_signature = signature.clone();
        let body = move |args: &Args| -> Result<bool> {
            let bound = bind_signature.bind(&qualified, args)?;
            Ok(test(bound.as_slice()))
        };

        Self {
            name,
            namespace,
            signature,
            doc: None,
            body: Arc::new(body),
        }
    }

    /// Create a predicate from a body that handles the raw arguments itself.
    pub fn from_fn<F>(
        namespace: impl Into<String>,
        name: impl Into<String>,
        signature: Signature,
        body: F,
    ) -> Self
    where
        F: Fn(&Args) -> Result<bool> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            signature,
            doc: None,
            body: Arc::new(body),
        }
    }

    /// Attach documentation.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `<namespace>.<name>`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Call with full positional/keyword arguments.
    pub fn call(&self, args: &Args) -> Result<bool> {
        (self.body)(args)
    }

    /// Call with a single positional argument.
    pub fn test(&self, value: impl Into<Value>) -> Result<bool> {
        self.call(&Args::new().arg(value))
    }

    /// True if both handles share the same body.
    pub fn same_body(&self, other: &Predicate) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("signature", &self.signature)
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.qualified_name(), self.signature)
    }
}
