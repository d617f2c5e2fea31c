use std::collections::HashMap;

use crate::board::PositionKey;

/// Occurrence count per position, owned by the game loop.
#[derive(Clone, Debug, Default)]
pub struct RepetitionTable {
    counts: HashMap<PositionKey, u32>,
}

impl RepetitionTable {
    #[must_use]
    pub fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &PositionKey) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Record one more occurrence and return the new count.
    pub fn increment(&mut self, key: PositionKey) -> u32 {
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Number of distinct positions seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
