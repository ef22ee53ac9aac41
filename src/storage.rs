//! Persistence of the current game and the completed-game history.
//!
//! The engine only needs a string key-value store. Failures of the store, and
//! data that no longer parses, are logged and treated as "nothing stored":
//! a [`ScoreKeeper`] never hands a storage error back to its caller.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::StoreError;
use crate::game::Game;
use crate::history::{GameHistory, Timestamp, push_newest};
use crate::options::{GameOptions, StoreOptions};
use crate::seat::PLAYER_COUNT;
use crate::sync::Mutex;

/// A string key-value store, such as browser local storage.
pub trait KeyValueStore {
    /// Reads the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes the value under `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the write.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// An in-memory [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.with(|entries| entries.len())
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.with(|entries| entries.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .with(|entries| entries.insert(String::from(key), String::from(value)));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.with(|entries| entries.remove(key));
        Ok(())
    }
}

/// Owns the game in progress and keeps it, and the history, in a store.
///
/// All mutating operations take `&mut self`, so saves of the same key never
/// interleave.
#[derive(Debug)]
pub struct ScoreKeeper<S> {
    store: S,
    options: StoreOptions,
    current: Option<Game>,
}

impl<S: KeyValueStore> ScoreKeeper<S> {
    /// Creates a score keeper with no current game loaded.
    #[must_use]
    pub const fn new(store: S, options: StoreOptions) -> Self {
        Self {
            store,
            options,
            current: None,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the game in progress.
    #[must_use]
    pub const fn current_game(&self) -> Option<&Game> {
        self.current.as_ref()
    }

    /// Returns the game in progress for recording bids and tricks.
    #[must_use]
    pub const fn current_game_mut(&mut self) -> Option<&mut Game> {
        self.current.as_mut()
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value.filter(|json| !json.is_empty()),
            Err(error) => {
                tracing::warn!(key, %error, "store read failed");
                None
            }
        }
    }

    /// Loads the saved game in progress, replacing any game held in memory.
    ///
    /// A missing, unreadable or malformed saved game leaves no current game.
    /// A saved dealer index past the last seat is wrapped back onto the table.
    pub fn load_current_game(&mut self) -> Option<&Game> {
        self.current = self
            .read(&self.options.current_game_key)
            .and_then(|json| match serde_json::from_str::<Game>(&json) {
                Ok(mut game) => {
                    let saved_dealer = game.dealer_index();
                    if game.normalize_dealer() {
                        tracing::warn!(
                            saved_dealer,
                            dealer = game.dealer_index(),
                            "saved dealer index out of range"
                        );
                    }
                    Some(game)
                }
                Err(error) => {
                    tracing::warn!(%error, "discarding malformed saved game");
                    None
                }
            });

        self.current.as_ref()
    }

    /// Saves the game in progress.
    ///
    /// Returns `true` if a game was written. Returns `false` when there is no
    /// current game or the store dropped the write.
    pub fn save_current_game(&self) -> bool {
        let Some(game) = &self.current else {
            return false;
        };

        let json = match serde_json::to_string(game) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize current game");
                return false;
            }
        };

        match self.store.set(&self.options.current_game_key, &json) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "dropping save of current game");
                false
            }
        }
    }

    /// Forgets the game in progress, in memory and in the store.
    pub fn clear_current_game(&mut self) {
        self.current = None;
        if let Err(error) = self.store.remove(&self.options.current_game_key) {
            tracing::warn!(%error, "failed to remove saved game");
        }
    }

    /// Starts a new game, replacing any game in progress. The new game is not
    /// saved until [`ScoreKeeper::save_current_game`] is called.
    pub fn start_new_game(
        &mut self,
        player_names: [String; PLAYER_COUNT],
        options: GameOptions,
        started_at: Timestamp,
    ) -> &mut Game {
        self.current.insert(Game::new(player_names, options, started_at))
    }

    /// Completes the game in progress, records it in the history and clears it.
    ///
    /// Returns the history entry, or `None` if there was no game in progress
    /// or it had already been completed.
    pub fn complete_game(&mut self, completed_at: Timestamp) -> Option<GameHistory> {
        let game = self.current.as_mut()?;

        let entry = match game.complete(completed_at) {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "not recording game in history");
                return None;
            }
        };

        self.add_to_history(entry.clone());
        self.clear_current_game();

        Some(entry)
    }

    fn add_to_history(&self, entry: GameHistory) {
        let mut history = self.history();
        push_newest(&mut history, entry, self.options.max_history);

        match serde_json::to_string(&history) {
            Ok(json) => {
                if let Err(error) = self.store.set(&self.options.history_key, &json) {
                    tracing::warn!(%error, "dropping history update");
                }
            }
            Err(error) => tracing::warn!(%error, "failed to serialize history"),
        }
    }

    /// Returns completed games, newest first.
    ///
    /// A missing, unreadable or malformed history reads as empty.
    #[must_use]
    pub fn history(&self) -> Vec<GameHistory> {
        self.read(&self.options.history_key)
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(history) => Some(history),
                Err(error) => {
                    tracing::warn!(%error, "discarding malformed history");
                    None
                }
            })
            .unwrap_or_default()
    }
}
