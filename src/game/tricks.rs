use crate::error::TricksError;
use crate::round::Round;
use crate::seat::PLAYER_COUNT;

use super::{Game, RoundPosition};

impl Game {
    fn check_tricks_target(&self, position: RoundPosition) -> Result<u8, TricksError> {
        if self.is_completed {
            return Err(TricksError::GameCompleted);
        }

        self.round(position)
            .map(Round::cards_dealt)
            .ok_or(TricksError::RoundNotFound)
    }

    /// Records how many tricks one seat took, then rescores the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is completed, the round or seat does not
    /// exist, or `tricks` exceeds the cards dealt.
    pub fn record_tricks(
        &mut self,
        position: RoundPosition,
        seat: usize,
        tricks: u8,
    ) -> Result<(), TricksError> {
        let cards_dealt = self.check_tricks_target(position)?;

        if seat >= PLAYER_COUNT {
            return Err(TricksError::PlayerNotFound);
        }
        if tricks > cards_dealt {
            return Err(TricksError::TricksExceedCardsDealt);
        }

        if let Some(round) = self.round_mut(position) {
            round.set_actual(seat, tricks);
        }
        self.recalculate_all();

        Ok(())
    }

    /// Records the tricks taken by all four seats, then rescores the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is completed, the round does not exist,
    /// or any count exceeds the cards dealt. Nothing is changed on error.
    pub fn record_round_tricks(
        &mut self,
        position: RoundPosition,
        tricks: [u8; PLAYER_COUNT],
    ) -> Result<(), TricksError> {
        let cards_dealt = self.check_tricks_target(position)?;

        if tricks.iter().any(|&taken| taken > cards_dealt) {
            return Err(TricksError::TricksExceedCardsDealt);
        }

        if let Some(round) = self.round_mut(position) {
            for (seat, taken) in tricks.into_iter().enumerate() {
                round.set_actual(seat, taken);
            }
        }
        self.recalculate_all();

        Ok(())
    }

    /// Returns the round being played.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.round(self.current_position)
    }
}
