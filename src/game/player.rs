use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Opaque identity of one playing agent.
///
/// Ids only need to be distinct between the two sides of a game; an empty
/// cell is not an id, so a collision with "empty" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Hands out unique player ids.
///
/// Injected into agent constructors instead of a hidden process-wide counter,
/// so tests and callers control the scope of uniqueness. Ids are strictly
/// increasing within one allocator.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU32,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator {
            next: AtomicU32::new(1),
        }
    }

    /// Allocate the next id.
    pub fn allocate(&self) -> PlayerId {
        PlayerId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
