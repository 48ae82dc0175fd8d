//! Pawn-Drop: a heuristic placement engine for a two-player pawn-dropping game.
//!
//! Each turn a player drops one pawn on a square grid; rows of pawns score.
//! This crate decides where the acting player's next pawn goes.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size, glyphs, and neighbourhood offsets
//! - [`board`] - Board snapshot and the queries the engine relies on
//! - [`threat`] - Open-three detection used to keep drops self-safe
//! - [`pairs`] - Pair classification (alignment, separation) and dispatch
//! - [`harpoon`] - Options for two adjacent pawns on a row or column
//! - [`needle`] - Options for gapped or diagonal pairs
//! - [`opening`] - First-pawn placement on the central cells
//! - [`nearby`] - Centroid-based placement near existing pawns
//! - [`shapes`] - The decision entry point, [`shapes::drop_shapes`]
//! - [`protocol`] - Text protocol for driving the engine
//!
//! ## Example
//!
//! ```
//! use pawn_drop::board::{Board, Coord, Player};
//! use pawn_drop::shapes::drop_shapes;
//!
//! let mut board = Board::new(8);
//! board.place(Coord::new(3, 3), Player::First).unwrap();
//!
//! let mut rng = fastrand::Rng::with_seed(7);
//! let decision = drop_shapes(&board, Player::First, &mut rng).unwrap();
//! assert!(board.is_empty_at(decision.position));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod harpoon;
pub mod nearby;
pub mod needle;
pub mod opening;
pub mod pairs;
pub mod protocol;
pub mod shapes;
pub mod threat;

pub use error::{EngineError, Result};
