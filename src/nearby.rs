//! Proximity placement around the centroid of a player's pawns.
//!
//! Used once the player has at least one pawn: take the centroid if free,
//! otherwise a random safe cell on the ring around it, otherwise any legal
//! cell on the board.

use fastrand::Rng;
use log::{debug, warn};

use crate::board::{Board, Coord, Pawn, random_choice};
use crate::constants::RING;
use crate::error::{EngineError, Result};
use crate::threat::ThreatScorer;

/// Pick a cell near the player's pawns.
pub fn drop_nearby(
    pawns: &[Pawn],
    board: &Board,
    scorer: &impl ThreatScorer,
    rng: &mut Rng,
) -> Result<Coord> {
    let player = pawns.first().ok_or(EngineError::NoPawns)?.player;
    let center = centroid(pawns).ok_or(EngineError::NoPawns)?;

    if board.is_empty_at(center) {
        debug!("centroid {center} is free");
        return Ok(center);
    }

    let safe: Vec<Coord> = board
        .empty_among(&ring(center))
        .into_iter()
        .filter(|&c| !scorer.is_gonna_be_third_in_row(c, player, board))
        .collect();

    if let Some(choice) = random_choice(&safe, rng) {
        debug!("ring around {center}: {} safe cell(s), picked {choice}", safe.len());
        return Ok(choice);
    }

    warn!("no safe cell around {center}, falling back to a random cell");
    board
        .random_legal_empty(player, rng)
        .ok_or(EngineError::NoLegalMove)
}

/// Mean row and column of the pawns, each rounded half-up.
pub fn centroid(pawns: &[Pawn]) -> Option<Coord> {
    if pawns.is_empty() {
        return None;
    }
    let n = pawns.len() as isize;
    let (row_sum, col_sum) = pawns.iter().fold((0, 0), |(r, c), p| {
        (r + p.position.row, c + p.position.col)
    });
    Some(Coord::new(round_half_up(row_sum, n), round_half_up(col_sum, n)))
}

/// `round(sum / n)` with halves rounded up.
fn round_half_up(sum: isize, n: isize) -> isize {
    (2 * sum + n).div_euclid(2 * n)
}

/// The eight neighbours of `center` in ring order.
pub fn ring(center: Coord) -> Vec<Coord> {
    RING.iter().map(|&(dr, dc)| center.offset(dr, dc)).collect()
}
