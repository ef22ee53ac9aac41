//! A block of rounds scored together, with its subtotals and bonus ledger.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::bonus::apply_segment_bonuses;
use crate::options::{GameMode, PlayType};
use crate::round::Round;
use crate::seat::PLAYER_COUNT;

/// A segment of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    segment_number: u8,
    rounds: Vec<Round>,
    subtotals: [i32; PLAYER_COUNT],
    bonus_adjustments: [i32; PLAYER_COUNT],
}

impl Segment {
    /// Creates a segment from its rounds, in play order.
    #[must_use]
    pub const fn new(segment_number: u8, rounds: Vec<Round>) -> Self {
        Self {
            segment_number,
            rounds,
            subtotals: [0; PLAYER_COUNT],
            bonus_adjustments: [0; PLAYER_COUNT],
        }
    }

    /// Returns the 1-based segment number.
    #[must_use]
    pub const fn segment_number(&self) -> u8 {
        self.segment_number
    }

    /// Returns the rounds in play order.
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Returns the sum of each seat's round scores, as of the last rescore.
    #[must_use]
    pub const fn subtotals(&self) -> &[i32; PLAYER_COUNT] {
        &self.subtotals
    }

    /// Returns the net bonus (positive) or deduction (negative) per seat.
    #[must_use]
    pub const fn bonus_adjustments(&self) -> &[i32; PLAYER_COUNT] {
        &self.bonus_adjustments
    }

    /// Returns whether every round has tricks recorded for every seat.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.rounds.iter().all(Round::is_completed)
    }

    /// Returns whether `seat` made their bid in every round. Unknown seats
    /// never sweep.
    #[must_use]
    pub fn is_sweep(&self, seat: usize) -> bool {
        seat < PLAYER_COUNT && self.rounds.iter().all(|round| round.made_bid(seat))
    }

    /// Rescores every round, applies bonuses if the segment is complete and
    /// refreshes the subtotals.
    pub fn rescore(&mut self, mode: GameMode, play_type: PlayType) {
        for round in &mut self.rounds {
            round.rescore(self.segment_number, mode);
        }

        if !apply_segment_bonuses(self, play_type) {
            self.bonus_adjustments = [0; PLAYER_COUNT];
        }

        for seat in 0..PLAYER_COUNT {
            self.subtotals[seat] = self.rounds.iter().map(|round| round.scores()[seat]).sum();
        }
    }

    pub(crate) fn rounds_mut(&mut self) -> &mut [Round] {
        &mut self.rounds
    }

    pub(crate) const fn bonus_adjustments_mut(&mut self) -> &mut [i32; PLAYER_COUNT] {
        &mut self.bonus_adjustments
    }
}
