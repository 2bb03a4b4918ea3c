//! Rendering options.

use serde::{Deserialize, Serialize};

/// Default row cap for descriptive text.
pub const DEFAULT_TEXT_ROWS: usize = 100;

/// Options shared by every output form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Render at most this many rows. `None` renders all rows.
    pub max_rows: Option<usize>,
    /// Include the summary and per-column statistics in descriptive text.
    pub include_stats: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_rows: Some(DEFAULT_TEXT_ROWS),
            include_stats: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, include_stats: bool) -> Self {
        self.include_stats = include_stats;
        self
    }
}
