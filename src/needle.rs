//! Needle analysis: pawns with one empty cell between them, or on a diagonal.
//!
//! For a gapped pair the gap is the score cell; the options are the two cells
//! beside the gap, across the pair's line. An adjacent diagonal pair has no gap
//! and is analysed end by end like a harpoon, along the diagonal.

use std::collections::BTreeSet;

use log::trace;

use crate::board::{Board, Coord, Pawn};
use crate::harpoon::check_end;
use crate::pairs::{Alignment, Pair};

/// Needle options for a pair, dispatching on alignment.
pub fn check_needle(pair: &Pair, board: &Board) -> BTreeSet<Coord> {
    match Alignment::of(pair) {
        Alignment::Straight => check_needle_perpendicularly(pair, board),
        Alignment::Diagonal => check_needle_diagonally(pair, board),
    }
}

/// Row or column pair with a one-cell gap.
pub fn check_needle_perpendicularly(pair: &Pair, board: &Board) -> BTreeSet<Coord> {
    if !(pair.shares_row() || pair.shares_column()) || pair.distance() != 2 {
        return BTreeSet::new();
    }
    let (low, high) = pair.ordered();
    check_gap(low, high, step_between(low, high), board)
}

/// Diagonal pair, either adjacent or with a one-cell gap.
pub fn check_needle_diagonally(pair: &Pair, board: &Board) -> BTreeSet<Coord> {
    if !pair.is_on_diagonal() {
        return BTreeSet::new();
    }
    let (low, high) = pair.ordered();
    let (dr, dc) = step_between(low, high);
    match pair.distance() {
        1 => {
            let mut options = check_end(low, (-dr, -dc), board);
            options.extend(check_end(high, (dr, dc), board));
            options
        }
        2 => check_gap(low, high, (dr, dc), board),
        _ => BTreeSet::new(),
    }
}

/// Unit step from `from` towards `to`.
fn step_between(from: Pawn, to: Pawn) -> (isize, isize) {
    (
        (to.position.row - from.position.row).signum(),
        (to.position.col - from.position.col).signum(),
    )
}

/// Options around the gap between `low` and `high`, `dir` the unit step from low to high.
fn check_gap(low: Pawn, high: Pawn, dir: (isize, isize), board: &Board) -> BTreeSet<Coord> {
    let (dr, dc) = dir;
    let gap = low.position.offset(dr, dc);
    if !board.is_empty_at(gap) {
        trace!("gap {} not empty", gap);
        return BTreeSet::new();
    }

    let before = low.position.offset(-dr, -dc);
    let after = high.position.offset(dr, dc);
    if board.is_player_at(before, low.player) || board.is_player_at(after, low.player) {
        trace!("gap {} would complete a four", gap);
        return BTreeSet::new();
    }

    [gap.offset(dc, -dr), gap.offset(-dc, dr)]
        .into_iter()
        .filter(|&c| board.is_suitable_to_drop(c, low.player))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    fn setup(size: usize, first: &[(isize, isize)], second: &[(isize, isize)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c) in first {
            board.place(Coord::new(r, c), Player::First).unwrap();
        }
        for &(r, c) in second {
            board.place(Coord::new(r, c), Player::Second).unwrap();
        }
        board
    }

    fn pair(a: (isize, isize), b: (isize, isize)) -> Pair {
        Pair::new(
            Pawn::new(Coord::new(a.0, a.1), Player::First),
            Pawn::new(Coord::new(b.0, b.1), Player::First),
        )
        .unwrap()
    }

    fn coords(list: &[(isize, isize)]) -> BTreeSet<Coord> {
        list.iter().map(|&(r, c)| Coord::new(r, c)).collect()
    }

    #[test]
    fn test_row_gap() {
        let board = setup(8, &[(3, 2), (3, 4)], &[]);
        let options = check_needle(&pair((3, 4), (3, 2)), &board);
        assert_eq!(options, coords(&[(2, 3), (4, 3)]));
    }

    #[test]
    fn test_column_gap() {
        let board = setup(8, &[(2, 5), (4, 5)], &[]);
        let options = check_needle(&pair((2, 5), (4, 5)), &board);
        assert_eq!(options, coords(&[(3, 4), (3, 6)]));
    }

    #[test]
    fn test_filled_gap_yields_nothing() {
        let board = setup(8, &[(3, 2), (3, 4)], &[(3, 3)]);
        assert!(check_needle(&pair((3, 2), (3, 4)), &board).is_empty());
    }

    #[test]
    fn test_gap_completing_four_yields_nothing() {
        let board = setup(8, &[(3, 2), (3, 4), (3, 5)], &[]);
        assert!(check_needle(&pair((3, 2), (3, 4)), &board).is_empty());

        let board = setup(8, &[(3, 1), (3, 2), (3, 4)], &[]);
        assert!(check_needle(&pair((3, 2), (3, 4)), &board).is_empty());
    }

    #[test]
    fn test_opponent_beyond_gap_pair_is_fine() {
        let board = setup(8, &[(3, 2), (3, 4)], &[(3, 5), (2, 3)]);
        let options = check_needle(&pair((3, 2), (3, 4)), &board);
        assert_eq!(options, coords(&[(4, 3)]));
    }

    #[test]
    fn test_diagonal_gap() {
        let board = setup(8, &[(2, 2), (4, 4)], &[]);
        let options = check_needle(&pair((2, 2), (4, 4)), &board);
        assert_eq!(options, coords(&[(4, 2), (2, 4)]));
    }

    #[test]
    fn test_anti_diagonal_gap() {
        let board = setup(8, &[(2, 4), (4, 2)], &[]);
        let options = check_needle(&pair((2, 4), (4, 2)), &board);
        assert_eq!(options, coords(&[(2, 2), (4, 4)]));
    }

    #[test]
    fn test_adjacent_diagonal_both_directions() {
        let board = setup(8, &[(3, 3), (4, 4)], &[]);
        let options = check_needle(&pair((3, 3), (4, 4)), &board);
        // Up-left end anchored at (2,2), down-right end anchored at (5,5).
        assert_eq!(
            options,
            coords(&[(1, 1), (3, 1), (1, 3), (6, 6), (6, 4), (4, 6)])
        );
    }

    #[test]
    fn test_adjacent_diagonal_own_fourth_blocks_one_end() {
        let board = setup(8, &[(3, 3), (4, 4), (6, 6)], &[]);
        let options = check_needle(&pair((3, 3), (4, 4)), &board);
        assert_eq!(options, coords(&[(1, 1), (3, 1), (1, 3)]));
    }

    #[test]
    fn test_misaligned_pairs_yield_nothing() {
        let board = setup(8, &[(1, 1), (2, 3)], &[]);
        assert!(check_needle_diagonally(&pair((1, 1), (2, 3)), &board).is_empty());
        assert!(check_needle_perpendicularly(&pair((1, 1), (1, 2)), &board).is_empty());
    }

    #[test]
    fn test_results_are_empty_and_in_bounds() {
        let board = setup(4, &[(0, 0), (1, 1)], &[(3, 1)]);
        let options = check_needle(&pair((0, 0), (1, 1)), &board);
        assert!(options.iter().all(|&c| board.is_empty_at(c)));
        assert_eq!(options, coords(&[(3, 3), (1, 3)]));
    }
}
