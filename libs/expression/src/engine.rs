//! Expression engine
//!
//! Front-end that keeps recently parsed expressions in an LRU cache keyed by
//! their source text.

use crate::context::Context;
use crate::error::Result;
use crate::expression::Expression;
use crate::parser::{ParseOptions, DEFAULT_MAX_DEPTH};
use lru::LruCache;
use semio_units::Quantity;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct EngineOptions {
    /// Number of parsed expressions kept; zero is treated as one
    pub cache_size: usize,
    /// Deepest call nesting accepted by parsing and evaluation
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            cache_size: 1000,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

pub struct Engine {
    options: EngineOptions,
    cache: Mutex<LruCache<String, Arc<Expression>>>,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        let capacity = NonZeroUsize::new(options.cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            options,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse `text`, reusing a cached tree when the same text was seen before.
    pub fn compile(&self, text: &str) -> Result<Arc<Expression>> {
        if let Some(hit) = self.lock_cache().get(text) {
            debug!(expression = text, "expression cache hit");
            return Ok(Arc::clone(hit));
        }

        let parse_options = ParseOptions {
            max_depth: self.options.max_depth,
        };
        let expression = Arc::new(Expression::deserialize_with_options(text, &parse_options)?);
        self.lock_cache()
            .put(text.to_string(), Arc::clone(&expression));
        debug!(expression = text, "expression cache miss");
        Ok(expression)
    }

    /// Compile and calculate in one step
    pub fn evaluate_expr(
        &self,
        text: &str,
        context: &dyn Context,
        target_unit: &str,
    ) -> Result<Quantity> {
        self.compile(text)?.calculate(context, target_unit)
    }

    /// Number of cached expressions
    pub fn cached(&self) -> usize {
        self.lock_cache().len()
    }

    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, LruCache<String, Arc<Expression>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
