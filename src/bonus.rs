//! End-of-segment bonuses for players who made every bid.
//!
//! A player who sweeps a segment has their best round doubled. Each opponent
//! who did not sweep loses the value of their own best round, or of the
//! runner-up round when the best one is the last round of the segment.

use crate::options::PlayType;
use crate::seat::{PLAYER_COUNT, partner_of};
use crate::segment::Segment;

/// Returns the index and value of the highest score for `seat`, preferring the
/// latest round on ties.
fn best_round(segment: &Segment, seat: usize) -> Option<(usize, i32)> {
    segment
        .rounds()
        .iter()
        .map(|round| round.scores()[seat])
        .enumerate()
        .fold(None, |best, (index, score)| match best {
            Some((_, top)) if top > score => best,
            _ => Some((index, score)),
        })
}

/// Picks the round and amount to take away from `seat`.
fn deduction_round(segment: &Segment, seat: usize) -> Option<(usize, i32)> {
    let (candidate, top) = best_round(segment, seat)?;
    let rounds = segment.rounds();

    if candidate + 1 < rounds.len() {
        return Some((candidate, top));
    }

    // The last round cannot be reduced: take the runner-up, earliest on ties.
    let runner_up = rounds
        .iter()
        .map(|round| round.scores()[seat])
        .enumerate()
        .filter(|&(index, _)| index != candidate)
        .fold(None, |best, (index, score)| match best {
            Some((_, top)) if top >= score => best,
            _ => Some((index, score)),
        });

    runner_up.or_else(|| rounds.first().map(|round| (0, round.scores()[seat])))
}

fn apply_deduction(segment: &mut Segment, seat: usize) {
    let Some((index, amount)) = deduction_round(segment, seat) else {
        return;
    };

    segment.rounds_mut()[index].deduct(seat, amount);
    segment.bonus_adjustments_mut()[seat] -= amount;

    tracing::debug!(
        segment = segment.segment_number(),
        seat,
        round = index,
        amount,
        "segment deduction applied"
    );
}

/// Applies sweep bonuses and the matching deductions to a finished segment.
///
/// The bonus ledger is cleared first and rebuilt from the current round
/// scores, so the scores must hold freshly computed base values. Returns
/// `false` without touching the segment if any round still lacks tricks.
///
/// Sweeping seats are handled in seat order. In pairs play a sweep never
/// costs the sweeper's partner anything; in both play types a seat that swept
/// itself is never a deduction target.
pub fn apply_segment_bonuses(segment: &mut Segment, play_type: PlayType) -> bool {
    if !segment.is_completed() {
        return false;
    }

    *segment.bonus_adjustments_mut() = [0; PLAYER_COUNT];

    let all_correct: [bool; PLAYER_COUNT] = core::array::from_fn(|seat| segment.is_sweep(seat));

    for seat in 0..PLAYER_COUNT {
        if !all_correct[seat] {
            continue;
        }

        let Some((index, top)) = best_round(segment, seat) else {
            continue;
        };

        segment.rounds_mut()[index].double_score(seat);
        segment.bonus_adjustments_mut()[seat] += top;

        tracing::debug!(
            segment = segment.segment_number(),
            seat,
            round = index,
            bonus = top,
            "segment sweep bonus applied"
        );

        let spared = match play_type {
            PlayType::Pairs => Some(partner_of(seat)),
            PlayType::Individuals => None,
        };

        for target in 0..PLAYER_COUNT {
            if target != seat && Some(target) != spared && !all_correct[target] {
                apply_deduction(segment, target);
            }
        }
    }

    true
}
