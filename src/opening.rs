//! First-pawn placement on the central cells.

use fastrand::Rng;
use log::debug;

use crate::board::{Board, Coord, random_choice};
use crate::constants::OPENING_VALUE;
use crate::error::{EngineError, Result};
use crate::shapes::DropDecision;

/// Drop a player's first pawn on a random empty central cell.
pub fn drop_first_pawn(board: &Board, rng: &mut Rng) -> Result<DropDecision> {
    let empty = empty_central_fields(board);
    let position = random_choice(&empty, rng).ok_or(EngineError::NoLegalMove)?;
    debug!("opening drop at {position} ({} central cell(s) free)", empty.len());
    Ok(DropDecision {
        position,
        value: Some(OPENING_VALUE),
    })
}

/// Central cells that are still empty.
pub fn empty_central_fields(board: &Board) -> Vec<Coord> {
    board.empty_among(&board.central_coordinates())
}
