//! Cache Module
//!
//! Provides the in-process read cache for catalog queries. Entries carry no
//! TTL and are never evicted; they live until a mutation invalidates them.

mod handle;
mod invalidation;
mod key;
mod stats;
mod store;


// Re-export public types
pub use handle::{Cache, MemoryCache};
pub use invalidation::Invalidation;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::CacheStore;
