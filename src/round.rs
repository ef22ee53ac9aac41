//! A single dealt hand: bids, tricks taken and scores for all four seats.

use serde::{Deserialize, Serialize};

use crate::options::GameMode;
use crate::scoring::round_score;
use crate::seat::PLAYER_COUNT;

/// One round of play.
///
/// Scores are derived data. They are rewritten by the game on every
/// recalculation and only meaningful for seats whose tricks are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    cards_dealt: u8,
    bids: [u8; PLAYER_COUNT],
    actual_tricks: [Option<u8>; PLAYER_COUNT],
    /// Seats whose bid has been entered.
    #[serde(default)]
    bids_placed: [bool; PLAYER_COUNT],
    scores: [i32; PLAYER_COUNT],
    /// Scores before any segment bonus or deduction.
    original_scores: [i32; PLAYER_COUNT],
    has_bonus: [bool; PLAYER_COUNT],
    has_deduction: [bool; PLAYER_COUNT],
}

impl Round {
    /// Creates an empty round dealing `cards_dealt` cards to each player.
    #[must_use]
    pub const fn new(cards_dealt: u8) -> Self {
        Self {
            cards_dealt,
            bids: [0; PLAYER_COUNT],
            actual_tricks: [None; PLAYER_COUNT],
            bids_placed: [false; PLAYER_COUNT],
            scores: [0; PLAYER_COUNT],
            original_scores: [0; PLAYER_COUNT],
            has_bonus: [false; PLAYER_COUNT],
            has_deduction: [false; PLAYER_COUNT],
        }
    }

    /// Creates a fully played round. Scores stay zero until the round is rescored.
    #[must_use]
    pub fn played(cards_dealt: u8, bids: [u8; PLAYER_COUNT], actual: [u8; PLAYER_COUNT]) -> Self {
        let mut round = Self::new(cards_dealt);
        round.set_bids(bids);
        round.actual_tricks = actual.map(Some);
        round
    }

    /// Returns the number of cards dealt to each player.
    #[must_use]
    pub const fn cards_dealt(&self) -> u8 {
        self.cards_dealt
    }

    /// Returns the bids, indexed by seat.
    #[must_use]
    pub const fn bids(&self) -> &[u8; PLAYER_COUNT] {
        &self.bids
    }

    /// Returns the tricks taken, `None` for seats not yet recorded.
    #[must_use]
    pub const fn actual_tricks(&self) -> &[Option<u8>; PLAYER_COUNT] {
        &self.actual_tricks
    }

    /// Returns the current scores, including any segment bonus or deduction.
    #[must_use]
    pub const fn scores(&self) -> &[i32; PLAYER_COUNT] {
        &self.scores
    }

    /// Returns the scores as they were before segment bonuses were applied.
    #[must_use]
    pub const fn original_scores(&self) -> &[i32; PLAYER_COUNT] {
        &self.original_scores
    }

    /// Returns whether this round was doubled for `seat`.
    #[must_use]
    pub fn has_bonus(&self, seat: usize) -> bool {
        self.has_bonus.get(seat).copied().unwrap_or(false)
    }

    /// Returns whether this round was reduced for `seat`.
    #[must_use]
    pub fn has_deduction(&self, seat: usize) -> bool {
        self.has_deduction.get(seat).copied().unwrap_or(false)
    }

    /// Returns whether every seat has a recorded trick count.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.actual_tricks.iter().all(Option::is_some)
    }

    /// Returns whether a bid has been entered for `seat`.
    #[must_use]
    pub fn has_bid(&self, seat: usize) -> bool {
        self.bids_placed.get(seat).copied().unwrap_or(false)
    }

    /// Returns whether every seat has a bid entered.
    #[must_use]
    pub fn all_bids_placed(&self) -> bool {
        self.bids_placed.iter().all(|&placed| placed)
    }

    /// Returns whether `seat` made exactly their bid. Unknown seats never do.
    #[must_use]
    pub fn made_bid(&self, seat: usize) -> bool {
        match (self.actual_tricks.get(seat), self.bids.get(seat)) {
            (Some(&Some(actual)), Some(&bid)) => actual == bid,
            _ => false,
        }
    }

    pub(crate) const fn set_bids(&mut self, bids: [u8; PLAYER_COUNT]) {
        self.bids = bids;
        self.bids_placed = [true; PLAYER_COUNT];
    }

    pub(crate) const fn set_bid(&mut self, seat: usize, bid: u8) {
        self.bids[seat] = bid;
        self.bids_placed[seat] = true;
    }

    pub(crate) const fn set_actual(&mut self, seat: usize, tricks: u8) {
        self.actual_tricks[seat] = Some(tricks);
    }

    /// Recomputes base scores and clears bonus markers.
    pub(crate) fn rescore(&mut self, segment_number: u8, mode: GameMode) {
        for seat in 0..PLAYER_COUNT {
            self.scores[seat] = self.actual_tricks[seat].map_or(0, |actual| {
                round_score(
                    self.bids[seat],
                    actual,
                    self.cards_dealt,
                    segment_number,
                    mode,
                )
            });
        }
        self.original_scores = self.scores;
        self.has_bonus = [false; PLAYER_COUNT];
        self.has_deduction = [false; PLAYER_COUNT];
    }

    pub(crate) fn double_score(&mut self, seat: usize) {
        self.scores[seat] *= 2;
        self.has_bonus[seat] = true;
    }

    pub(crate) fn deduct(&mut self, seat: usize, amount: i32) {
        self.scores[seat] -= amount;
        self.has_deduction[seat] = true;
    }
}
