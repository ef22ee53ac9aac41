//! Seat indices and partnerships.

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 4;

/// Returns the partner of `seat` in pairs play (0 with 2, 1 with 3).
#[must_use]
pub const fn partner_of(seat: usize) -> usize {
    (seat + 2) % PLAYER_COUNT
}

/// Returns the seat to the left of `seat`.
#[must_use]
pub const fn next_seat(seat: usize) -> usize {
    (seat + 1) % PLAYER_COUNT
}
