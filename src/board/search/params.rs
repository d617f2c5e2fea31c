/// Search configuration passed to the search entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fixed search depth in plies. Zero is treated as one.
    pub depth: u32,
    /// Material swing (mover's perspective, whole pawns) at or below which a
    /// move is rejected as a blunder. Negative: -4 rejects losing 4 or more.
    pub blunder_threshold: i32,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(depth: u32, blunder_threshold: i32) -> Self {
        SearchConfig {
            depth,
            blunder_threshold,
        }
    }

    #[must_use]
    pub const fn with_depth(self, depth: u32) -> Self {
        SearchConfig { depth, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            blunder_threshold: -4,
        }
    }
}
