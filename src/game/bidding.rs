use crate::error::BidError;
use crate::round::Round;
use crate::seat::PLAYER_COUNT;

use super::{Game, RoundPosition};

fn bid_total(bids: &[u8; PLAYER_COUNT]) -> u32 {
    bids.iter().copied().map(u32::from).sum()
}

/// Returns whether a full set of bids is legal: the bids must not add up to
/// the number of cards dealt.
///
/// # Example
///
/// ```
/// use joker_score::bids_are_valid;
///
/// assert!(bids_are_valid(&[1, 0, 1, 0], 3));
/// assert!(!bids_are_valid(&[1, 1, 1, 0], 3));
/// ```
#[must_use]
pub fn bids_are_valid(bids: &[u8; PLAYER_COUNT], cards_dealt: u8) -> bool {
    bid_total(bids) != u32::from(cards_dealt)
}

/// Returns whether the last seat to bid may bid `last_bid` given the other
/// three bids already in `bids`. The entry for `last_seat` itself is ignored.
#[must_use]
pub fn last_bid_allowed(
    bids: &[u8; PLAYER_COUNT],
    last_bid: u8,
    cards_dealt: u8,
    last_seat: usize,
) -> bool {
    let others: u32 = bids
        .iter()
        .enumerate()
        .filter(|&(seat, _)| seat != last_seat)
        .map(|(_, &bid)| u32::from(bid))
        .sum();

    others + u32::from(last_bid) != u32::from(cards_dealt)
}

impl Game {
    fn check_bid_target(&self, position: RoundPosition) -> Result<u8, BidError> {
        if self.is_completed {
            return Err(BidError::GameCompleted);
        }

        self.round(position)
            .map(Round::cards_dealt)
            .ok_or(BidError::RoundNotFound)
    }

    /// Sets all four bids of a round at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is completed, the round does not exist,
    /// any bid exceeds the cards dealt, or the bids add up to the cards
    /// dealt. Nothing is changed on error.
    pub fn set_bids(
        &mut self,
        position: RoundPosition,
        bids: [u8; PLAYER_COUNT],
    ) -> Result<(), BidError> {
        let cards_dealt = self.check_bid_target(position)?;

        if bids.iter().any(|&bid| bid > cards_dealt) {
            return Err(BidError::BidExceedsCardsDealt);
        }
        if !bids_are_valid(&bids, cards_dealt) {
            return Err(BidError::SumEqualsCardsDealt);
        }

        if let Some(round) = self.round_mut(position) {
            round.set_bids(bids);
        }
        self.recalculate_all();

        Ok(())
    }

    /// Sets one seat's bid.
    ///
    /// Whichever seat's entry completes the round's four bids is the last
    /// bidder: that bid must not bring the total to the number of cards
    /// dealt. The same holds when a bid is corrected after all four are in.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is completed, the round or seat does not
    /// exist, the bid exceeds the cards dealt, or the four bids would add up
    /// to the cards dealt. Nothing is changed on error.
    pub fn place_bid(
        &mut self,
        position: RoundPosition,
        seat: usize,
        bid: u8,
    ) -> Result<(), BidError> {
        let cards_dealt = self.check_bid_target(position)?;

        if seat >= PLAYER_COUNT {
            return Err(BidError::PlayerNotFound);
        }
        if bid > cards_dealt {
            return Err(BidError::BidExceedsCardsDealt);
        }

        let Some(round) = self.round_mut(position) else {
            return Err(BidError::RoundNotFound);
        };

        let completes_bids = (0..PLAYER_COUNT).all(|other| other == seat || round.has_bid(other));
        if completes_bids && !last_bid_allowed(round.bids(), bid, cards_dealt, seat) {
            return Err(BidError::SumEqualsCardsDealt);
        }

        round.set_bid(seat, bid);
        self.recalculate_all();

        Ok(())
    }
}
