//! Background Tasks Module
//!
//! Contains background tasks that run periodically during proxy operation.
//!
//! # Tasks
//! - TTL Cleanup: Sweeps expired entries from all cache regions

mod cleanup;

pub use cleanup::spawn_cleanup_task;
