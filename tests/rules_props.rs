use othello::{has_legal_move, legal_moves, score, try_move, Board, Cell, Side};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Board reached by random legal play from the standard opening.
fn random_position(seed: u64, rows: usize, cols: usize) -> (Board, Side) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::with_opening(rows, cols).unwrap();
    let mut side = Side::Black;
    let plies = rng.random_range(0..rows * cols);
    for _ in 0..plies {
        let moves = legal_moves(&board, side);
        if moves.is_empty() {
            if !has_legal_move(&board, side.opponent()) {
                break;
            }
        } else {
            let (r, c) = moves[rng.random_range(0..moves.len())];
            try_move(&mut board, side, r, c).unwrap();
        }
        side = side.opponent();
    }
    (board, side)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn accepted_moves_balance_scores(
        seed in any::<u64>(),
        half_rows in 2usize..=5,
        half_cols in 2usize..=5,
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let (mut board, side) = random_position(seed, half_rows * 2, half_cols * 2);
        let (row, col) = (row_seed % board.rows(), col_seed % board.cols());
        let before = board.clone();
        let (mine, theirs) = (score(&board, side), score(&board, side.opponent()));

        match try_move(&mut board, side, row, col) {
            Ok(applied) => {
                prop_assert!(applied.captured() >= 1);
                prop_assert_eq!(score(&board, side), mine + applied.flipped);
                prop_assert_eq!(score(&board, side.opponent()), theirs - applied.captured());
                prop_assert_eq!(board.disc_count(), before.disc_count() + 1);
                prop_assert_eq!(board.get(row, col).unwrap(), Cell::Disc(side));
            }
            Err(_) => prop_assert_eq!(board, before),
        }
    }

    #[test]
    fn legal_moves_are_exactly_the_accepted_ones(
        seed in any::<u64>(),
        half in 2usize..=4,
    ) {
        let (board, side) = random_position(seed, half * 2, half * 2);
        let legal = legal_moves(&board, side);
        for r in 0..board.rows() {
            for c in 0..board.cols() {
                let mut probe = board.clone();
                let accepted = try_move(&mut probe, side, r, c).is_ok();
                prop_assert_eq!(accepted, legal.contains(&(r, c)));
            }
        }
        prop_assert_eq!(has_legal_move(&board, side), !legal.is_empty());
    }
}
