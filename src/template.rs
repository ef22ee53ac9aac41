//! Fixed segment layouts for each game mode.

use alloc::vec::Vec;

use crate::options::GameMode;
use crate::round::Round;
use crate::segment::Segment;

/// Cards dealt in every round of a nines segment.
pub const NINES: u8 = 9;

/// Rounds in a nines segment.
const NINES_ROUNDS: usize = 4;

/// Number of segments in a game.
pub const SEGMENT_COUNT: u8 = 4;

fn nines_segment(number: u8) -> Segment {
    Segment::new(number, (0..NINES_ROUNDS).map(|_| Round::new(NINES)).collect())
}

/// Builds the empty segments for a new game.
///
/// # Example
///
/// ```
/// use joker_score::{GameMode, segment_template};
///
/// let segments = segment_template(GameMode::Standard);
/// let first: Vec<u8> = segments[0].rounds().iter().map(|r| r.cards_dealt()).collect();
/// assert_eq!(first, [1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
#[must_use]
pub fn segment_template(mode: GameMode) -> Vec<Segment> {
    match mode {
        GameMode::Standard => alloc::vec![
            Segment::new(1, (1..=8).map(Round::new).collect()),
            nines_segment(2),
            Segment::new(3, (1..=8).rev().map(Round::new).collect()),
            nines_segment(4),
        ],
        GameMode::OnlyNines => (1..=SEGMENT_COUNT).map(nines_segment).collect(),
    }
}

/// Returns whether the given segment deals nine cards every round.
#[must_use]
pub const fn is_nines_segment(segment_number: u8, mode: GameMode) -> bool {
    match mode {
        GameMode::Standard => segment_number == 2 || segment_number == 4,
        GameMode::OnlyNines => true,
    }
}
