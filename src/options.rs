//! Game and storage configuration options.

use alloc::string::String;

use serde::{Deserialize, Serialize};

/// Which cards-dealt pattern the game follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// 1 to 8 cards, four nines, 8 down to 1 cards, four nines.
    #[default]
    Standard,
    /// Every segment is four rounds of nine cards.
    OnlyNines,
}

/// Whether players score alone or in fixed partnerships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayType {
    /// Every player for themselves.
    #[default]
    Individuals,
    /// Seats 0 and 2 against seats 1 and 3.
    Pairs,
}

/// Configuration options for a Joker game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use joker_score::{GameMode, GameOptions, PlayType};
///
/// let options = GameOptions::default()
///     .with_mode(GameMode::OnlyNines)
///     .with_play_type(PlayType::Pairs);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOptions {
    /// Cards-dealt pattern.
    pub mode: GameMode,
    /// Individuals or pairs.
    pub play_type: PlayType,
}

impl GameOptions {
    /// Sets the game mode.
    ///
    /// # Example
    ///
    /// ```
    /// use joker_score::{GameMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_mode(GameMode::OnlyNines);
    /// assert_eq!(options.mode, GameMode::OnlyNines);
    /// ```
    #[must_use]
    pub const fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the play type.
    ///
    /// # Example
    ///
    /// ```
    /// use joker_score::{GameOptions, PlayType};
    ///
    /// let options = GameOptions::default().with_play_type(PlayType::Pairs);
    /// assert_eq!(options.play_type, PlayType::Pairs);
    /// ```
    #[must_use]
    pub const fn with_play_type(mut self, play_type: PlayType) -> Self {
        self.play_type = play_type;
        self
    }
}

/// Key used for the in-progress game.
pub const CURRENT_GAME_KEY: &str = "joker_current_game";
/// Key used for the completed-game history.
pub const GAME_HISTORY_KEY: &str = "joker_game_history";
/// Default number of history entries kept.
pub const MAX_HISTORY: usize = 10;

/// Where and how much the [`ScoreKeeper`](crate::storage::ScoreKeeper) persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Key holding the serialized current game.
    pub current_game_key: String,
    /// Key holding the serialized history list.
    pub history_key: String,
    /// Maximum number of history entries kept, newest first.
    pub max_history: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            current_game_key: String::from(CURRENT_GAME_KEY),
            history_key: String::from(GAME_HISTORY_KEY),
            max_history: MAX_HISTORY,
        }
    }
}

impl StoreOptions {
    /// Sets the current-game key.
    #[must_use]
    pub fn with_current_game_key(mut self, key: impl Into<String>) -> Self {
        self.current_game_key = key.into();
        self
    }

    /// Sets the history key.
    #[must_use]
    pub fn with_history_key(mut self, key: impl Into<String>) -> Self {
        self.history_key = key.into();
        self
    }

    /// Sets the history cap.
    ///
    /// # Example
    ///
    /// ```
    /// use joker_score::StoreOptions;
    ///
    /// let options = StoreOptions::default().with_max_history(3);
    /// assert_eq!(options.max_history, 3);
    /// ```
    #[must_use]
    pub const fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }
}
