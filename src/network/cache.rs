//! Injectable TTL cache for route results.
//!
//! The cache is the only shared mutable resource in the engine. Entries are
//! immutable snapshots; staleness is bounded by TTL, not invalidated when
//! underlying legs change. Racing writers on the same key overwrite each
//! other, which is safe because recomputation is idempotent.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::models::RouteResult;

/// Cache key: origin hub, destination hub, service level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteCacheKey {
    /// Origin hub id.
    pub origin: String,
    /// Destination hub id.
    pub destination: String,
    /// Service level of the query.
    pub service_level: String,
}

impl RouteCacheKey {
    /// Creates a cache key.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        service_level: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            service_level: service_level.into(),
        }
    }
}

/// Read-through/write-through cache seam injected into the engine.
pub trait RouteCache {
    /// Returns a cached result, if present and fresh.
    fn get(&self, key: &RouteCacheKey) -> Option<RouteResult>;

    /// Stores a computed result.
    fn put(&self, key: RouteCacheKey, result: RouteResult);
}

/// In-memory TTL cache. Default TTL is one hour.
///
/// # Examples
///
/// ```
/// use freight_routing::models::{RouteLeg, RouteResult, RouteType, TransportMode};
/// use freight_routing::network::{InMemoryRouteCache, RouteCache, RouteCacheKey};
///
/// let cache = InMemoryRouteCache::new();
/// let key = RouteCacheKey::new("A", "B", "standard");
/// assert!(cache.get(&key).is_none());
///
/// let result = RouteResult::from_legs(RouteType::Direct, vec![RouteLeg {
///     origin: "A".into(),
///     destination: "B".into(),
///     distance_km: 100.0,
///     transit_hours: 2.0,
///     cost: 50.0,
///     mode: TransportMode::Truck,
/// }]);
/// cache.put(key.clone(), result.clone());
/// assert_eq!(cache.get(&key), Some(result));
/// ```
pub struct InMemoryRouteCache {
    ttl: Duration,
    entries: Mutex<HashMap<RouteCacheKey, (Instant, RouteResult)>>,
}

impl InMemoryRouteCache {
    /// Default time-to-live for cached routes.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

    /// Creates a cache with the default one-hour TTL.
    pub fn new() -> Self {
        Self::with_ttl(Self::DEFAULT_TTL)
    }

    /// Creates a cache with an explicit TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<RouteCacheKey, (Instant, RouteResult)>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryRouteCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteCache for InMemoryRouteCache {
    fn get(&self, key: &RouteCacheKey) -> Option<RouteResult> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some((stored_at, result)) if stored_at.elapsed() < self.ttl => {
                debug!(origin = %key.origin, destination = %key.destination, "route cache hit");
                Some(result.clone())
            }
            Some(_) => {
                // Expired entries are dropped lazily on read.
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn put(&self, key: RouteCacheKey, result: RouteResult) {
        self.lock().insert(key, (Instant::now(), result));
    }
}

/// A cache that stores nothing, for callers wanting every query fresh.
pub struct NullRouteCache;

impl RouteCache for NullRouteCache {
    fn get(&self, _key: &RouteCacheKey) -> Option<RouteResult> {
        None
    }

    fn put(&self, _key: RouteCacheKey, _result: RouteResult) {}
}
