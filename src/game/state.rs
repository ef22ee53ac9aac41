//! Game position types.

use serde::{Deserialize, Serialize};

/// Locates a round within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundPosition {
    /// Index into the game's segments.
    pub segment_index: usize,
    /// Index into that segment's rounds.
    pub round_index: usize,
}

impl RoundPosition {
    /// Creates a position from zero-based segment and round indices.
    #[must_use]
    pub const fn new(segment_index: usize, round_index: usize) -> Self {
        Self {
            segment_index,
            round_index,
        }
    }
}
