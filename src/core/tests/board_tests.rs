use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use crate::core::board::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::core::palette::PALETTE_CAPACITY;
use crate::core::{Board, BoardError, CardState, IgnoreReason, Resolution, Rgba, SelectOutcome};

/// Helper: Deals the default board with a fixed seed
fn default_board() -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    Board::with_default_size(&mut rng).unwrap()
}

/// Helper: Two indices sharing a colour
fn matching_pair(board: &Board) -> (usize, usize) {
    let first = board.cards()[0].identity_color();
    let twin = (1..board.len())
        .find(|&i| board.cards()[i].identity_color() == first)
        .unwrap();
    (0, twin)
}

/// Helper: Two indices with different colours
fn mismatching_pair(board: &Board) -> (usize, usize) {
    let first = board.cards()[0].identity_color();
    let other = (1..board.len())
        .find(|&i| board.cards()[i].identity_color() != first)
        .unwrap();
    (0, other)
}

fn colour_counts(board: &Board) -> HashMap<Rgba, usize> {
    let mut counts = HashMap::new();
    for card in board.cards() {
        *counts.entry(card.identity_color()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_default_board_dimensions() {
    let board = default_board();

    assert_eq!(board.columns(), DEFAULT_COLUMNS);
    assert_eq!(board.rows(), DEFAULT_ROWS);
    assert_eq!(board.len(), 30);
    assert!(!board.is_empty());
    assert!(board.cards().iter().all(|c| c.state() == CardState::Hidden));
}

#[test]
fn test_default_board_has_fifteen_pairs() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = Board::with_default_size(&mut rng).unwrap();
        let counts = colour_counts(&board);

        assert_eq!(counts.len(), 15, "seed {}", seed);
        assert!(counts.values().all(|&n| n == 2), "seed {}", seed);
    }
}

#[test]
fn test_odd_cell_count_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = Board::new(3, 3, &mut rng);

    assert_eq!(
        result.unwrap_err(),
        BoardError::OddCellCount { columns: 3, rows: 3, cells: 9 }
    );
}

#[test]
fn test_empty_board_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    assert!(matches!(
        Board::new(0, 4, &mut rng),
        Err(BoardError::EmptyBoard { .. })
    ));
    assert!(matches!(
        Board::new(4, 0, &mut rng),
        Err(BoardError::EmptyBoard { .. })
    ));
}

#[test]
fn test_overflowing_dimensions_rejected() {
    assert_eq!(
        Board::check_dimensions(usize::MAX, 2),
        Err(BoardError::TooLarge { columns: usize::MAX, rows: 2 })
    );

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(matches!(
        Board::new(2, usize::MAX, &mut rng),
        Err(BoardError::TooLarge { .. })
    ));
}

#[test]
fn test_palette_capacity_boundary() {
    // Largest board the palette can colour
    assert_eq!(
        Board::check_dimensions(PALETTE_CAPACITY, 2),
        Ok(PALETTE_CAPACITY * 2)
    );

    // One pair more is rejected up front
    assert_eq!(
        Board::check_dimensions(PALETTE_CAPACITY + 1, 2),
        Err(BoardError::TooManyPairs {
            columns: PALETTE_CAPACITY + 1,
            rows: 2,
            pairs: PALETTE_CAPACITY + 1,
            max: PALETTE_CAPACITY,
        })
    );

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(matches!(
        Board::new(4096, 1025, &mut rng),
        Err(BoardError::TooManyPairs { .. })
    ));
}

#[test]
fn test_column_major_indexing() {
    let board = default_board();

    assert_eq!(board.index_of(0, 0), Some(0));
    assert_eq!(board.index_of(0, 4), Some(4));
    assert_eq!(board.index_of(1, 0), Some(5));
    assert_eq!(board.index_of(5, 4), Some(29));
    assert_eq!(board.index_of(6, 0), None);
    assert_eq!(board.index_of(0, 5), None);

    assert_eq!(board.position_of(7), Some((1, 2)));
    assert_eq!(board.position_of(30), None);

    assert_eq!(board.card_at(1, 2), board.card(7));
}

#[test]
fn test_single_selection_reveals() {
    let mut board = default_board();

    assert_eq!(board.select(4), SelectOutcome::Revealed);
    assert_eq!(board.card(4).unwrap().state(), CardState::Revealed);
    assert_eq!(board.selection(), &[4]);
    assert!(board.accepts_input());
}

#[test]
fn test_same_card_twice_not_added_again() {
    let mut board = default_board();

    board.select(4);
    assert_eq!(
        board.select(4),
        SelectOutcome::Ignored(IgnoreReason::AlreadySelected)
    );
    assert_eq!(board.selection(), &[4], "Card should be in the set once");
    assert!(board.accepts_input());
}

#[test]
fn test_second_selection_completes_pair() {
    let mut board = default_board();

    board.select(0);
    assert_eq!(board.select(1), SelectOutcome::PairComplete);
    assert!(board.is_awaiting_evaluation());
    assert!(!board.accepts_input());
}

#[test]
fn test_no_third_card_while_pending() {
    let mut board = default_board();

    board.select(0);
    board.select(1);

    assert_eq!(
        board.select(2),
        SelectOutcome::Ignored(IgnoreReason::AwaitingEvaluation)
    );
    assert_eq!(board.card(2).unwrap().state(), CardState::Hidden);
    assert_eq!(board.selection().len(), 2);
}

#[test]
fn test_out_of_bounds_ignored() {
    let mut board = default_board();

    assert_eq!(
        board.select(30),
        SelectOutcome::Ignored(IgnoreReason::OutOfBounds)
    );
    assert!(board.selection().is_empty());
}

#[test]
fn test_matching_pair_becomes_matched() {
    let mut board = default_board();
    let (a, b) = matching_pair(&board);

    board.select(a);
    board.select(b);

    assert_eq!(board.resolve_pending(), Some(Resolution::Matched([a, b])));
    assert!(board.card(a).unwrap().is_matched());
    assert!(board.card(b).unwrap().is_matched());
    assert!(board.selection().is_empty());
    assert_eq!(board.matched_count(), 2);
}

#[test]
fn test_matched_card_selection_is_noop() {
    let mut board = default_board();
    let (a, b) = matching_pair(&board);
    board.select(a);
    board.select(b);
    board.resolve_pending();

    assert_eq!(
        board.select(a),
        SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
    );
    assert!(board.selection().is_empty());
    assert!(board.card(a).unwrap().is_matched());
}

#[test]
fn test_mismatched_pair_hides_again() {
    let mut board = default_board();
    let (a, b) = mismatching_pair(&board);

    board.select(a);
    board.select(b);
    let resolution = board.resolve_pending().unwrap();

    assert!(!resolution.is_match());
    assert_eq!(resolution.indices(), [a, b]);
    assert_eq!(board.card(a).unwrap().state(), CardState::Hidden);
    assert_eq!(board.card(b).unwrap().state(), CardState::Hidden);

    // Both are selectable again
    assert_eq!(board.select(a), SelectOutcome::Revealed);
    assert_eq!(board.select(b), SelectOutcome::PairComplete);
}

#[test]
fn test_resolve_without_pair_is_noop() {
    let mut board = default_board();
    assert_eq!(board.resolve_pending(), None);

    board.select(3);
    assert_eq!(board.resolve_pending(), None);
    assert_eq!(board.selection(), &[3]);
    assert!(board.card(3).unwrap().is_revealed());
}

#[test]
fn test_two_by_one_board_always_matches() {
    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = Board::new(2, 1, &mut rng).unwrap();

        board.select(0);
        board.select(1);

        assert_eq!(board.resolve_pending(), Some(Resolution::Matched([0, 1])));
    }
}

proptest! {
    #[test]
    fn prop_every_colour_on_exactly_two_cards(
        seed in any::<u64>(),
        columns in 1usize..9,
        rows in 1usize..9,
    ) {
        prop_assume!((columns * rows) % 2 == 0);

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = Board::new(columns, rows, &mut rng).unwrap();
        let counts = colour_counts(&board);

        prop_assert_eq!(counts.len(), columns * rows / 2);
        prop_assert!(counts.values().all(|&n| n == 2));
    }
}
