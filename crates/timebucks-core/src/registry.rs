//! Registry of transformation methods.

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::transform::builtins;
use crate::{Conversion, Method, TemporalDate, TimeBucks, TransformError, Transformation};

/// What `describe` reports for one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSummary {
    /// Method name.
    pub method: Method,
    /// One-line description.
    pub description: String,
    /// First and last year with reference data, for index-backed methods.
    pub coverage: Option<(i32, i32)>,
}

/// Maps method names to transformations.
///
/// The registry is seeded with the built-in methods and can grow at
/// runtime; entries are never removed, and registering an existing name
/// replaces it. Registration takes `&self`, so a registry shared behind an
/// `Arc` can be extended by any holder.
///
/// # Examples
///
/// ```
/// use timebucks_core::{
///     Currency, Provenance, TemporalDate, TimeBucks, TransformError, TransformationRegistry,
/// };
/// use rust_decimal_macros::dec;
///
/// let registry = TransformationRegistry::new();
/// registry.register(
///     "CUSTOM:FLAT",
///     |source: &TimeBucks, target: TemporalDate| -> Result<TimeBucks, TransformError> {
///         Ok(TimeBucks::calculated(
///             source.amount(),
///             source.currency(),
///             target,
///             Provenance::new("CUSTOM:FLAT", source.date()),
///         ))
///     },
/// );
///
/// let tb = TimeBucks::natural(dec!(10), Currency::Usd, TemporalDate::from_year(1990));
/// let flat = registry.transform(&tb, "CUSTOM:FLAT", TemporalDate::from_year(2020)).unwrap();
/// assert_eq!(flat.to_string(), "$10@2020[CUSTOM:FLAT:1990]");
/// ```
pub struct TransformationRegistry {
    methods: RwLock<HashMap<Method, Arc<dyn Transformation>>>,
}

impl TransformationRegistry {
    /// Create a registry holding the built-in CPI, WAGE and GOLD methods.
    pub fn new() -> Self {
        let registry = Self::empty();
        for transformation in builtins() {
            let method = transformation.method().clone();
            registry.register(method, transformation);
        }
        registry
    }

    /// Create a registry with no methods at all.
    pub fn empty() -> Self {
        Self {
            methods: RwLock::new(HashMap::new()),
        }
    }

    /// Register a transformation, replacing any previous one of that name.
    pub fn register(&self, method: impl Into<Method>, transformation: impl Transformation + 'static) {
        self.register_shared(method, Arc::new(transformation));
    }

    /// Register an already shared transformation.
    pub fn register_shared(&self, method: impl Into<Method>, transformation: Arc<dyn Transformation>) {
        let method = method.into();
        let previous = self.methods.write().insert(method.clone(), transformation);
        if previous.is_some() {
            tracing::debug!(%method, "replaced transformation method");
        } else {
            tracing::debug!(%method, "registered transformation method");
        }
    }

    /// Look up a transformation by name.
    pub fn get(&self, method: &str) -> Option<Arc<dyn Transformation>> {
        self.methods.read().get(method).cloned()
    }

    /// Whether a method of that name is registered.
    pub fn contains(&self, method: &str) -> bool {
        self.methods.read().contains_key(method)
    }

    /// Apply the named method to `source`.
    ///
    /// The transformation runs outside the registry lock, so it may itself
    /// consult or extend the registry.
    pub fn transform(
        &self,
        source: &TimeBucks,
        method: &str,
        target: TemporalDate,
    ) -> Result<TimeBucks, TransformError> {
        let transformation = self
            .get(method)
            .ok_or_else(|| TransformError::UnknownMethod(Method::new(method)))?;
        tracing::trace!(method, from = %source.date(), to = %target, "applying transformation");
        transformation.apply(source, target)
    }

    /// Apply the named method and report the rate it used.
    pub fn explain(
        &self,
        source: &TimeBucks,
        method: &str,
        target: TemporalDate,
    ) -> Result<Conversion, TransformError> {
        let transformation = self
            .get(method)
            .ok_or_else(|| TransformError::UnknownMethod(Method::new(method)))?;
        transformation.explain(source, target)
    }

    /// Snapshot of every registered method.
    ///
    /// Changes to the returned map do not affect the registry.
    pub fn all_methods(&self) -> BTreeMap<Method, Arc<dyn Transformation>> {
        self.methods
            .read()
            .iter()
            .map(|(method, t)| (method.clone(), Arc::clone(t)))
            .collect()
    }

    /// Summaries of every method, sorted by name.
    pub fn describe(&self) -> Vec<MethodSummary> {
        self.all_methods()
            .into_iter()
            .map(|(method, t)| MethodSummary {
                description: t.description().to_string(),
                coverage: t.coverage(),
                method,
            })
            .collect()
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.read().len()
    }

    /// Whether no methods are registered.
    pub fn is_empty(&self) -> bool {
        self.methods.read().is_empty()
    }
}

impl Default for TransformationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransformationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformationRegistry")
            .field("methods", &self.all_methods().keys().collect::<Vec<_>>())
            .finish()
    }
}
