//! Per-round scoring rules.

use crate::options::GameMode;
use crate::template::is_nines_segment;

/// Points for a correct bid of 1 through 8 tricks (when that is not the whole hand).
const CORRECT_BID_POINTS: [i32; 8] = [100, 150, 200, 250, 300, 350, 400, 450];

/// Points for bidding zero and taking zero.
const PASS_POINTS: i32 = 50;

/// Penalty for bidding at least one trick and taking none.
const MISSED_PENALTY: i32 = 200;

/// Same penalty in a nine-card segment.
const MISSED_PENALTY_NINES: i32 = 500;

/// Calculates the points one player earns in a round.
///
/// A correct bid scores 50 for zero, 100 per card for taking the whole hand,
/// and otherwise follows the 100, 150, ..., 450 progression (continued as
/// `bid * 50 + 50` past eight). A wrong bid scores 10 per trick taken, minus
/// a penalty when a non-zero bid took nothing. The result may be negative.
///
/// # Example
///
/// ```
/// use joker_score::{GameMode, round_score};
///
/// assert_eq!(round_score(0, 0, 5, 1, GameMode::Standard), 50);
/// assert_eq!(round_score(3, 0, 9, 2, GameMode::Standard), -500);
/// ```
#[must_use]
pub fn round_score(bid: u8, actual: u8, cards_dealt: u8, segment_number: u8, mode: GameMode) -> i32 {
    if bid == actual {
        if bid == 0 {
            return PASS_POINTS;
        }
        if bid == cards_dealt {
            return i32::from(bid) * 100;
        }
        return CORRECT_BID_POINTS
            .get(usize::from(bid) - 1)
            .copied()
            .unwrap_or_else(|| i32::from(bid) * 50 + 50);
    }

    let mut score = i32::from(actual) * 10;

    if bid > 0 && actual == 0 {
        score -= if is_nines_segment(segment_number, mode) {
            MISSED_PENALTY_NINES
        } else {
            MISSED_PENALTY
        };
    }

    score
}
