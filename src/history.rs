//! Completed-game summaries and timestamps.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::options::{GameMode, PlayType};
use crate::seat::PLAYER_COUNT;

/// Seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from seconds since the Unix epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the seconds since the Unix epoch.
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    /// Reads the system clock. A clock set before 1970 reads as the epoch.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn now() -> Self {
        Self(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs()),
        )
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameHistory {
    /// Player names by seat.
    pub player_names: [String; PLAYER_COUNT],
    /// Cards-dealt pattern the game used.
    pub mode: GameMode,
    /// Individuals or pairs.
    pub play_type: PlayType,
    /// Final totals by seat (pair totals in pairs play).
    pub final_scores: [i32; PLAYER_COUNT],
    /// When the game was completed.
    pub completed_at: Timestamp,
}

/// Puts `entry` at the front of `history` and drops anything past `max_entries`.
pub fn push_newest(history: &mut Vec<GameHistory>, entry: GameHistory, max_entries: usize) {
    history.insert(0, entry);
    history.truncate(max_entries);
}
