use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;

/// Generates unique identifiers from the wall clock.
///
/// Ids are epoch milliseconds bumped to be strictly increasing, so two
/// creations within the same millisecond still get distinct ids. Clones
/// share the same counter.
#[derive(Clone)]
pub struct IdGenerator {
    last: Arc<AtomicI64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            last: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Next unique id: `max(now_ms, previous + 1)`.
    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        loop {
            let last = self.last.load(Ordering::SeqCst);
            let candidate = now.max(last + 1);
            if self
                .last
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return candidate;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_ids_never_repeat() {
        let generator = IdGenerator::new();
        let ids: Vec<i64> = (0..1000).map(|_| generator.next_id()).collect();

        for window in ids.windows(2) {
            assert!(window[1] > window[0], "ids must be strictly increasing");
        }
    }

    #[test]
    fn clones_share_the_counter() {
        let generator = IdGenerator::new();
        let clone = generator.clone();

        let first = generator.next_id();
        let second = clone.next_id();
        assert!(second > first);
    }
}
