//! Width resolver: ASCII fast path, results cache and ambiguous-width policy

use log::{debug, trace};
use parking_lot::Mutex;

use crate::cache::{CacheKey, InsertionOrderCache};
use crate::classify::classify;
use crate::codepoint::{CodePoint, IntoCodePoint};
use crate::error::WidthResult;
use crate::types::{DisplayWidth, ResolverConfig, WidthCategory, WidthOptions};

/// Resolves display widths, caching results per `(code point, ambiguous_as_wide)`.
///
/// The cache sits behind a mutex held for the whole
/// check/compute/evict/insert sequence, so eviction stays in strict
/// insertion order even under contention. A resolver is `Sync` and can be
/// shared across threads; independent resolvers never share cache state.
#[derive(Debug)]
pub struct WidthResolver {
    cache: Mutex<InsertionOrderCache>,
}

impl WidthResolver {
    /// Resolver with the default cache capacity
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        debug!(
            "creating width resolver with cache capacity {}",
            config.cache_capacity
        );
        Self {
            cache: Mutex::new(InsertionOrderCache::new(config.cache_capacity)),
        }
    }

    /// Display width of a code point (1 or 2 columns)
    ///
    /// # Returns
    /// * `Ok(width)` - 2 for Wide and Fullwidth, 2 for Ambiguous when
    ///   `options.ambiguous_as_wide` is set, 1 otherwise
    /// * `Err(WidthError::InvalidCodePoint)` - input is not a non-negative safe integer
    pub fn resolve_width(
        &self,
        code_point: impl IntoCodePoint,
        options: WidthOptions,
    ) -> WidthResult<DisplayWidth> {
        let code_point = code_point.into_code_point()?;
        Ok(self.resolve(code_point, options))
    }

    /// Display width of an already validated code point
    pub fn resolve(&self, code_point: CodePoint, options: WidthOptions) -> DisplayWidth {
        // Printable ASCII is Narrow throughout the dataset
        if code_point.is_printable_ascii() {
            return 1;
        }

        let key = (code_point, options.ambiguous_as_wide);
        let mut cache = self.cache.lock();
        if let Some(width) = cache.get(&key) {
            return width;
        }

        let width = classify(code_point).display_width(options.ambiguous_as_wide);
        if let Some((evicted, ambiguous_as_wide)) = cache.insert(key, width) {
            trace!(
                "evicted cached width for {} (ambiguous_as_wide={})",
                evicted,
                ambiguous_as_wide
            );
        }
        width
    }

    /// Raw category of a code point, bypassing the fast path and the cache
    pub fn classification_of(&self, code_point: impl IntoCodePoint) -> WidthResult<WidthCategory> {
        Ok(classify(code_point.into_code_point()?))
    }

    /// Number of cached widths
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.lock().capacity()
    }

    /// Cached keys, oldest first
    pub fn cached_keys(&self) -> Vec<CacheKey> {
        self.cache.lock().keys().copied().collect()
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

impl Default for WidthResolver {
    fn default() -> Self {
        Self::new()
    }
}
