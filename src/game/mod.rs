//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::CompleteError;
use crate::history::{GameHistory, Timestamp};
use crate::options::{GameOptions, PlayType};
use crate::round::Round;
use crate::seat::{PLAYER_COUNT, partner_of};
use crate::segment::Segment;
use crate::template::segment_template;

mod bidding;
mod dealer;
pub mod state;
mod tricks;

pub use bidding::{bids_are_valid, last_bid_allowed};
pub use state::RoundPosition;

/// Seat that deals the first round, so seat 0 bids first.
const INITIAL_DEALER: usize = 3;

/// A Joker game: players, rules, the round grid and the dealer.
///
/// Every mutation that changes bids or tricks rescores the whole game before
/// returning, so the scores, subtotals and bonus ledgers read from a `Game`
/// are always consistent with its recorded plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    player_names: [String; PLAYER_COUNT],
    options: GameOptions,
    current_dealer_index: usize,
    current_position: RoundPosition,
    segments: Vec<Segment>,
    is_completed: bool,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl Game {
    /// Creates a new game with empty rounds laid out for the chosen mode.
    ///
    /// # Example
    ///
    /// ```
    /// use joker_score::{Game, GameOptions, Timestamp};
    ///
    /// let names = ["Ana", "Beka", "Gio", "Nino"].map(String::from);
    /// let game = Game::new(names, GameOptions::default(), Timestamp::from_secs(0));
    /// assert_eq!(game.segments().len(), 4);
    /// assert_eq!(game.first_bidder_index(), 0);
    /// ```
    #[must_use]
    pub fn new(
        player_names: [String; PLAYER_COUNT],
        options: GameOptions,
        started_at: Timestamp,
    ) -> Self {
        tracing::info!(
            mode = ?options.mode,
            play_type = ?options.play_type,
            "starting new game"
        );

        Self {
            player_names,
            options,
            current_dealer_index: INITIAL_DEALER,
            current_position: RoundPosition::default(),
            segments: segment_template(options.mode),
            is_completed: false,
            started_at,
            completed_at: None,
        }
    }

    /// Returns the player names by seat.
    #[must_use]
    pub const fn player_names(&self) -> &[String; PLAYER_COUNT] {
        &self.player_names
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the segments in play order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the round at `position`, if it exists.
    #[must_use]
    pub fn round(&self, position: RoundPosition) -> Option<&Round> {
        self.segments
            .get(position.segment_index)?
            .rounds()
            .get(position.round_index)
    }

    fn round_mut(&mut self, position: RoundPosition) -> Option<&mut Round> {
        self.segments
            .get_mut(position.segment_index)?
            .rounds_mut()
            .get_mut(position.round_index)
    }

    /// Returns whether the game has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns when the game started.
    #[must_use]
    pub const fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Returns when the game was completed, if it was.
    #[must_use]
    pub const fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    /// Rescores every round, applies the bonuses of finished segments and
    /// refreshes the subtotals.
    ///
    /// Scores are always rebuilt from bids and tricks, so calling this
    /// repeatedly leaves the game unchanged.
    pub fn recalculate_all(&mut self) {
        let GameOptions { mode, play_type } = self.options;
        for segment in &mut self.segments {
            segment.rescore(mode, play_type);
        }
    }

    /// Returns each seat's total over all completed rounds.
    ///
    /// Rounds still missing tricks for any seat contribute nothing. In pairs
    /// play every seat reports its pair's combined total, so seats 0 and 2
    /// always match, as do seats 1 and 3.
    #[must_use]
    pub fn final_scores(&self) -> [i32; PLAYER_COUNT] {
        let mut totals = [0; PLAYER_COUNT];

        for round in self
            .segments
            .iter()
            .flat_map(Segment::rounds)
            .filter(|round| round.is_completed())
        {
            for (total, score) in totals.iter_mut().zip(round.scores()) {
                *total += score;
            }
        }

        if self.options.play_type == PlayType::Pairs {
            let individual = totals;
            for (seat, total) in totals.iter_mut().enumerate() {
                *total = individual[seat] + individual[partner_of(seat)];
            }
        }

        totals
    }

    /// Marks the game completed and summarizes it for the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was already completed.
    pub fn complete(&mut self, completed_at: Timestamp) -> Result<GameHistory, CompleteError> {
        if self.is_completed {
            return Err(CompleteError::AlreadyCompleted);
        }

        self.is_completed = true;
        self.completed_at = Some(completed_at);

        let final_scores = self.final_scores();
        tracing::info!(?final_scores, "game completed");

        Ok(GameHistory {
            player_names: self.player_names.clone(),
            mode: self.options.mode,
            play_type: self.options.play_type,
            final_scores,
            completed_at,
        })
    }
}
