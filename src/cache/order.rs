//! Write Order Module
//!
//! Tracks insertion recency for capacity eviction.

use std::collections::VecDeque;

// == Write Order ==
/// Tracks the order in which keys were written to a region.
///
/// Keys are stored in a VecDeque where:
/// - Front = least recently written (next eviction candidate)
/// - Back = most recently written
///
/// Reads do not reorder anything: eviction is by write recency only, and an
/// overwrite counts as a fresh write.
#[derive(Debug, Default)]
pub struct WriteOrder {
    /// Keys ordered from oldest write to newest
    order: VecDeque<String>,
}

impl WriteOrder {
    // == Constructor ==
    /// Creates a new empty write-order tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Marks a key as freshly written (moves to the back).
    ///
    /// If the key is already tracked its old position is discarded first.
    pub fn record(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the least recently written key.
    ///
    /// Returns None if the tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the least recently written key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = WriteOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_record_new_keys() {
        let mut order = WriteOrder::new();

        order.record("key1");
        order.record("key2");
        order.record("key3");

        assert_eq!(order.len(), 3);
        // key1 was written first, so it is the eviction candidate
        assert_eq!(order.peek_oldest(), Some(&"key1".to_string()));
    }

    #[test]
    fn test_overwrite_refreshes_recency() {
        let mut order = WriteOrder::new();

        order.record("key1");
        order.record("key2");
        order.record("key3");

        // Rewrite key1 - it should move to the back
        order.record("key1");

        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_oldest(), Some(&"key2".to_string()));
    }

    #[test]
    fn test_pop_oldest_follows_write_order() {
        let mut order = WriteOrder::new();

        order.record("a");
        order.record("b");
        order.record("c");

        assert_eq!(order.pop_oldest(), Some("a".to_string()));
        assert_eq!(order.pop_oldest(), Some("b".to_string()));
        assert_eq!(order.pop_oldest(), Some("c".to_string()));
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_pop_empty() {
        let mut order = WriteOrder::new();
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_remove() {
        let mut order = WriteOrder::new();

        order.record("key1");
        order.record("key2");
        order.record("key3");

        order.remove("key2");

        assert_eq!(order.len(), 2);
        assert_eq!(order.pop_oldest(), Some("key1".to_string()));
        assert_eq!(order.pop_oldest(), Some("key3".to_string()));
    }

    #[test]
    fn test_remove_nonexistent_key() {
        let mut order = WriteOrder::new();

        order.record("key1");

        // Removing an untracked key is a no-op
        order.remove("nonexistent");

        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_record_same_key_multiple_times() {
        let mut order = WriteOrder::new();

        order.record("key1");
        order.record("key1");
        order.record("key1");

        // Only one occurrence is tracked
        assert_eq!(order.len(), 1);
        assert_eq!(order.pop_oldest(), Some("key1".to_string()));
        assert!(order.is_empty());
    }
}
