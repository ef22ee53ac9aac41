use crate::seat::{PLAYER_COUNT, next_seat};

use super::{Game, RoundPosition};

impl Game {
    /// Returns the seat currently dealing.
    #[must_use]
    pub const fn dealer_index(&self) -> usize {
        self.current_dealer_index
    }

    /// Passes the deal to the next seat.
    pub const fn advance_dealer(&mut self) {
        self.current_dealer_index = next_seat(self.current_dealer_index);
    }

    /// Brings a dealer index read from outside the engine back onto the table.
    /// Returns `true` if it had to be changed.
    pub(crate) const fn normalize_dealer(&mut self) -> bool {
        let dealer = self.current_dealer_index % PLAYER_COUNT;
        let changed = dealer != self.current_dealer_index;
        self.current_dealer_index = dealer;
        changed
    }

    /// Returns the seat that bids first: the one after the dealer.
    #[must_use]
    pub const fn first_bidder_index(&self) -> usize {
        next_seat(self.current_dealer_index)
    }

    /// Returns all seats in bidding order. The dealer bids last.
    #[must_use]
    pub fn bidding_order(&self) -> [usize; PLAYER_COUNT] {
        let first = self.first_bidder_index();
        core::array::from_fn(|offset| (first + offset) % PLAYER_COUNT)
    }

    /// Returns the round being played.
    #[must_use]
    pub const fn current_position(&self) -> RoundPosition {
        self.current_position
    }

    /// Returns the next round position, crossing into the next segment.
    fn next_position(&self) -> Option<RoundPosition> {
        let RoundPosition {
            segment_index,
            round_index,
        } = self.current_position;

        let rounds_in_segment = self.segments.get(segment_index)?.rounds().len();
        if round_index + 1 < rounds_in_segment {
            return Some(RoundPosition::new(segment_index, round_index + 1));
        }

        (segment_index + 1..self.segments.len())
            .find(|&index| !self.segments[index].rounds().is_empty())
            .map(|index| RoundPosition::new(index, 0))
    }

    /// Moves on to the next round and passes the deal.
    ///
    /// Returns the new position, or `None` (changing nothing) if the current
    /// round is the last one of the game.
    pub fn advance_round(&mut self) -> Option<RoundPosition> {
        let next = self.next_position()?;
        self.current_position = next;
        self.advance_dealer();

        tracing::debug!(
            segment = next.segment_index,
            round = next.round_index,
            dealer = self.current_dealer_index,
            "advanced to next round"
        );

        Some(next)
    }
}
