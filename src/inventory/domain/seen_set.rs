use dashmap::DashSet;

/// SeenSet: process-lifetime membership of origins and content hashes
///
/// Both sets only grow. `mark_*` is an atomic check-then-insert: when several
/// threads race on the same value exactly one of them gets `true`.
#[derive(Debug, Default)]
pub struct SeenSet {
    origins: DashSet<String>,
    hashes: DashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an origin. Returns `true` if it had not been seen before.
    pub fn mark_origin(&self, origin: &str) -> bool {
        if self.origins.contains(origin) {
            return false;
        }
        self.origins.insert(origin.to_string())
    }

    /// Records a content hash. Returns `true` if it had not been seen before.
    pub fn mark_hash(&self, hash: &str) -> bool {
        if self.hashes.contains(hash) {
            return false;
        }
        self.hashes.insert(hash.to_string())
    }

    pub fn origin_count(&self) -> usize {
        self.origins.len()
    }

    pub fn hash_count(&self) -> usize {
        self.hashes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_mark_origin_once() {
        let seen = SeenSet::new();
        assert!(seen.mark_origin("file:/a.jar"));
        assert!(!seen.mark_origin("file:/a.jar"));
        assert_eq!(seen.origin_count(), 1);
    }

    #[test]
    fn test_origins_and_hashes_are_independent() {
        let seen = SeenSet::new();
        assert!(seen.mark_origin("abc"));
        assert!(seen.mark_hash("abc"));
        assert_eq!(seen.hash_count(), 1);
    }

    #[test]
    fn test_concurrent_mark_hash_has_single_winner() {
        let seen = Arc::new(SeenSet::new());
        let winners = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let seen = Arc::clone(&seen);
                let winners = Arc::clone(&winners);
                std::thread::spawn(move || {
                    if seen.mark_hash("deadbeef") {
                        winners.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(winners.load(Ordering::SeqCst), 1);
    }
}
