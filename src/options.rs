use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Largest world the game creates is 8400x2400; leave room for modded sizes.
pub const DEFAULT_MAX_TILES: u64 = 100_000_000;

/// Load configuration
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Reject worlds with more tiles than this before allocating the grid
    pub max_tiles: u64,
    /// Checked between tile records; set it to abort the load with `Cancelled`
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { max_tiles: DEFAULT_MAX_TILES, cancel: None }
    }
}

impl LoadOptions {
    pub fn with_max_tiles(mut self, max_tiles: u64) -> Self {
        self.max_tiles = max_tiles;
        self
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
