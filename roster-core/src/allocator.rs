use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out user ids, starting at 1.
///
/// Share one allocator between request handlers with an `Arc`. Every call to
/// [`IdAllocator::next`] is a single atomic increment, so concurrent callers
/// never observe the same id.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counter: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id.
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// The most recently issued id, or 0 if none has been issued yet.
    pub fn last_issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}
