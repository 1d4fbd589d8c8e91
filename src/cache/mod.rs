//! Cache Module
//!
//! In-memory memoization of upstream responses with TTL expiration and
//! write-order eviction, partitioned into one region per query type.

mod entry;
mod order;
mod region;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use order::WriteOrder;
pub use region::Region;
pub use stats::CacheStats;
pub use store::{RegionStore, ResponseCache};
