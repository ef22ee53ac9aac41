//! Round scoring, segment layout and segment bonus tests.

use joker_score::{
    GameMode, PlayType, Round, Segment, apply_segment_bonuses, is_nines_segment, round_score,
    segment_template,
};

fn cards_pattern(segment: &Segment) -> Vec<u8> {
    segment.rounds().iter().map(Round::cards_dealt).collect()
}

/// Segment 2 of a standard game where seat 0 makes every bid.
fn seat_zero_sweeps() -> Segment {
    Segment::new(
        2,
        vec![
            Round::played(9, [2, 3, 2, 1], [2, 4, 2, 1]),
            Round::played(9, [3, 2, 3, 0], [3, 2, 3, 2]),
            Round::played(9, [1, 4, 1, 2], [1, 5, 0, 3]),
            Round::played(9, [3, 1, 4, 2], [3, 1, 4, 2]),
        ],
    )
}

fn scores_by_round(segment: &Segment) -> Vec<[i32; 4]> {
    segment.rounds().iter().map(|round| *round.scores()).collect()
}

#[test]
fn correct_zero_bid_scores_fifty() {
    for cards in 1..=9 {
        assert_eq!(round_score(0, 0, cards, 1, GameMode::Standard), 50);
        assert_eq!(round_score(0, 0, cards, 2, GameMode::OnlyNines), 50);
    }
}

#[test]
fn taking_the_whole_hand_scores_hundred_per_card() {
    for cards in 1..=9 {
        assert_eq!(
            round_score(cards, cards, cards, 1, GameMode::Standard),
            i32::from(cards) * 100
        );
    }
}

#[test]
fn correct_bids_follow_table() {
    let expected = [100, 150, 200, 250, 300, 350, 400, 450];
    for (bid, points) in (1..=8).zip(expected) {
        assert_eq!(round_score(bid, bid, 9, 2, GameMode::Standard), points);
    }

    // Past the table the progression continues.
    assert_eq!(round_score(9, 9, 12, 2, GameMode::Standard), 500);
}

#[test]
fn missed_bid_penalties_depend_on_segment() {
    assert_eq!(round_score(3, 0, 5, 1, GameMode::Standard), -200);
    assert_eq!(round_score(3, 0, 9, 2, GameMode::Standard), -500);
    assert_eq!(round_score(3, 0, 5, 3, GameMode::Standard), -200);
    assert_eq!(round_score(3, 0, 9, 4, GameMode::Standard), -500);
    assert_eq!(round_score(1, 0, 9, 1, GameMode::OnlyNines), -500);
}

#[test]
fn wrong_bids_score_ten_per_trick() {
    assert_eq!(round_score(2, 5, 9, 1, GameMode::Standard), 50);
    assert_eq!(round_score(0, 3, 9, 2, GameMode::Standard), 30);
    assert_eq!(round_score(4, 1, 9, 4, GameMode::Standard), 10);
}

#[test]
fn nines_segments_by_mode() {
    let standard: Vec<bool> = (1..=4)
        .map(|number| is_nines_segment(number, GameMode::Standard))
        .collect();
    assert_eq!(standard, [false, true, false, true]);
    assert!((1..=4).all(|number| is_nines_segment(number, GameMode::OnlyNines)));
}

#[test]
fn standard_template_layout() {
    let segments = segment_template(GameMode::Standard);
    assert_eq!(segments.len(), 4);

    let numbers: Vec<u8> = segments.iter().map(Segment::segment_number).collect();
    assert_eq!(numbers, [1, 2, 3, 4]);

    assert_eq!(cards_pattern(&segments[0]), [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(cards_pattern(&segments[1]), [9, 9, 9, 9]);
    assert_eq!(cards_pattern(&segments[2]), [8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(cards_pattern(&segments[3]), [9, 9, 9, 9]);

    assert!(
        segments
            .iter()
            .flat_map(Segment::rounds)
            .all(|round| round.actual_tricks().iter().all(Option::is_none))
    );
}

#[test]
fn only_nines_template_layout() {
    let segments = segment_template(GameMode::OnlyNines);
    assert_eq!(segments.len(), 4);
    for segment in &segments {
        assert_eq!(cards_pattern(segment), [9, 9, 9, 9]);
    }
}

#[test]
fn single_round_scores_without_bonus_when_segment_incomplete() {
    let mut segment = Segment::new(
        1,
        vec![
            Round::played(1, [0, 1, 0, 0], [0, 1, 0, 0]),
            Round::new(2),
        ],
    );
    segment.rescore(GameMode::Standard, PlayType::Individuals);

    assert_eq!(segment.rounds()[0].scores(), &[50, 100, 50, 50]);
    assert_eq!(segment.bonus_adjustments(), &[0; 4]);
    assert_eq!(segment.subtotals(), &[50, 100, 50, 50]);
}

#[test]
fn bonus_engine_refuses_incomplete_segment() {
    let mut segment = Segment::new(
        1,
        vec![
            Round::played(1, [1, 1, 1, 1], [1, 0, 0, 0]),
            Round::new(2),
        ],
    );
    segment.rescore(GameMode::Standard, PlayType::Individuals);
    let before = segment.clone();

    assert!(!apply_segment_bonuses(&mut segment, PlayType::Individuals));
    assert_eq!(segment, before);
}

#[test]
fn individual_sweep_doubles_best_round_and_deducts_from_everyone_else() {
    let mut segment = seat_zero_sweeps();
    segment.rescore(GameMode::Standard, PlayType::Individuals);

    assert!(segment.is_sweep(0));
    assert!(!segment.is_sweep(1));

    assert_eq!(
        scores_by_round(&segment),
        [
            [150, 40, 150, 0],
            [200, 0, 0, 20],
            [100, 50, -500, 30],
            [400, 100, 250, 150],
        ]
    );
    assert_eq!(segment.bonus_adjustments(), &[200, -150, -200, -100]);
    assert_eq!(segment.subtotals(), &[850, 190, -100, 200]);

    // Seat 0 ties at 200 in rounds 1 and 3; the later one is doubled.
    assert!(segment.rounds()[3].has_bonus(0));
    assert!(!segment.rounds()[1].has_bonus(0));

    // Seat 1's best round is reduced directly.
    assert!(segment.rounds()[1].has_deduction(1));
    assert_eq!(segment.rounds()[1].original_scores()[1], 150);

    // Seat 2's best is the final round, so the runner-up pays.
    assert!(segment.rounds()[1].has_deduction(2));
    assert!(!segment.rounds()[3].has_deduction(2));

    // Seat 3's best is the final round too; round 0 is the runner-up.
    assert!(segment.rounds()[0].has_deduction(3));
}

#[test]
fn pairs_sweep_spares_partner() {
    let mut segment = seat_zero_sweeps();
    segment.rescore(GameMode::Standard, PlayType::Pairs);

    assert_eq!(segment.bonus_adjustments(), &[200, -150, 0, -100]);
    let partner: Vec<i32> = segment
        .rounds()
        .iter()
        .map(|round| round.scores()[2])
        .collect();
    assert_eq!(partner, [150, 200, -500, 250]);
}

#[test]
fn later_sweeps_stack_on_earlier_deductions() {
    let mut segment = Segment::new(
        1,
        vec![
            Round::played(3, [1, 0, 2, 0], [1, 0, 1, 1]),
            Round::played(3, [2, 1, 1, 0], [2, 1, 1, 0]),
            Round::played(3, [0, 1, 1, 2], [0, 1, 0, 3]),
        ],
    );
    segment.rescore(GameMode::Standard, PlayType::Individuals);

    assert_eq!(
        scores_by_round(&segment),
        [[100, 50, 0, 0], [300, 100, 0, 0], [50, 200, -200, 30]]
    );
    assert_eq!(segment.bonus_adjustments(), &[150, 100, -110, -60]);
    assert!(segment.rounds()[0].has_deduction(3));
    assert!(segment.rounds()[1].has_deduction(3));
}

#[test]
fn single_round_segment_falls_back_to_first_round() {
    let mut segment = Segment::new(1, vec![Round::played(5, [2, 3, 1, 0], [2, 4, 0, 1])]);
    segment.rescore(GameMode::Standard, PlayType::Individuals);

    assert_eq!(segment.rounds()[0].scores(), &[300, 0, 0, 0]);
    assert_eq!(segment.bonus_adjustments(), &[150, -40, 200, -10]);
}

#[test]
fn equal_scores_reduce_the_first_round() {
    let mut segment = Segment::new(
        2,
        vec![
            Round::played(9, [1, 2, 0, 0], [1, 4, 1, 1]),
            Round::played(9, [1, 2, 0, 0], [1, 4, 1, 1]),
            Round::played(9, [1, 2, 0, 0], [1, 4, 1, 1]),
            Round::played(9, [1, 2, 0, 0], [1, 4, 1, 1]),
        ],
    );
    segment.rescore(GameMode::Standard, PlayType::Individuals);

    let seat_one: Vec<i32> = segment
        .rounds()
        .iter()
        .map(|round| round.scores()[1])
        .collect();
    assert_eq!(seat_one, [0, 40, 40, 40]);
    assert_eq!(segment.bonus_adjustments(), &[100, -40, -10, -10]);
    assert!(segment.rounds()[3].has_bonus(0));
}

#[test]
fn rescoring_twice_is_stable() {
    let mut segment = seat_zero_sweeps();
    segment.rescore(GameMode::Standard, PlayType::Individuals);
    let once = segment.clone();
    segment.rescore(GameMode::Standard, PlayType::Individuals);
    assert_eq!(segment, once);
}
