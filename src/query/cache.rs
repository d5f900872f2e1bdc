use crate::math::{Real, Vector};

/// Warm-start data of the GJK algorithm for one shape pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkCache {
    /// The search direction GJK (or EPA) converged to during the previous query.
    ///
    /// A zero vector means the cache is cold.
    pub prev_closest_dir: Vector<Real>,
}

impl Default for GjkCache {
    fn default() -> Self {
        Self {
            prev_closest_dir: Vector::zeros(),
        }
    }
}

impl GjkCache {
    /// Resets this cache to its cold state.
    pub fn clear(&mut self) {
        self.prev_closest_dir = Vector::zeros();
    }
}

/// Per-pair data kept by detectors between two successive steps.
///
/// This is owned by the contact of the shape pair, for its whole lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CachedDetectorData {
    gjk_cache: Option<GjkCache>,
}

impl CachedDetectorData {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The GJK cache, if a GJK query already ran on this pair.
    pub fn gjk_cache(&self) -> Option<&GjkCache> {
        self.gjk_cache.as_ref()
    }

    /// The GJK cache, created cold if it doesn't exist yet.
    pub fn gjk_cache_mut(&mut self) -> &mut GjkCache {
        self.gjk_cache.get_or_insert_with(GjkCache::default)
    }

    /// Resets all the cached data.
    ///
    /// Must be called when the shape pair separates or its contact is destroyed.
    pub fn clear(&mut self) {
        if let Some(cache) = &mut self.gjk_cache {
            cache.clear();
        }
    }
}
