//! Harpoon analysis: two adjacent pawns on a row or column.
//!
//! Each open end of the pair has a score cell (the cell continuing the line).
//! Instead of taking the score cell directly, the analysis proposes the cells
//! around it (one further along the line and the two beside it), so the
//! next drop on the score cell finishes a row while the side pawn guards it.

use std::collections::BTreeSet;

use log::trace;

use crate::board::{Board, Coord, Pawn};
use crate::pairs::Pair;

/// Harpoon options for both ends of an adjacent straight pair.
/// Any other pair yields nothing.
pub fn check_harpoon(pair: &Pair, board: &Board) -> BTreeSet<Coord> {
    if !(pair.shares_row() || pair.shares_column()) || pair.distance() != 1 {
        return BTreeSet::new();
    }
    if pair.shares_row() {
        check_harpoon_in_row(pair, board)
    } else {
        check_harpoon_in_column(pair, board)
    }
}

fn check_harpoon_in_row(pair: &Pair, board: &Board) -> BTreeSet<Coord> {
    let (left, right) = pair.ordered();
    let mut options = check_end(left, (0, -1), board);
    options.extend(check_end(right, (0, 1), board));
    options
}

fn check_harpoon_in_column(pair: &Pair, board: &Board) -> BTreeSet<Coord> {
    let (lower, higher) = pair.ordered();
    let mut options = check_end(lower, (-1, 0), board);
    options.extend(check_end(higher, (1, 0), board));
    options
}

/// Options at one end of a line of two, `dir` pointing outward from `end`.
///
/// Yields nothing when the score cell is taken, or when the cell past it already
/// holds the player's pawn (filling the score cell would then make a four).
pub(crate) fn check_end(end: Pawn, dir: (isize, isize), board: &Board) -> BTreeSet<Coord> {
    let (dr, dc) = dir;
    let score = end.position.offset(dr, dc);
    if !board.is_empty_at(score) {
        trace!("end {}: score cell {} not empty", end.position, score);
        return BTreeSet::new();
    }

    let possible_fourth = score.offset(dr, dc);
    if board.is_player_at(possible_fourth, end.player) {
        trace!("end {}: {} would make a four", end.position, possible_fourth);
        return BTreeSet::new();
    }

    // Perpendicular to (dr, dc) is (dc, -dr); for diagonals this is the crossing diagonal.
    [
        possible_fourth,
        score.offset(dc, -dr),
        score.offset(-dc, dr),
    ]
    .into_iter()
    .filter(|&c| board.is_suitable_to_drop(c, end.player))
    .collect()
}
