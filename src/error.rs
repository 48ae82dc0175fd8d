use crate::board::Coord;

/// Errors raised by the placement engine and its board collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// No empty cell is available for the requested strategy.
    #[error("no legal move available")]
    NoLegalMove,

    /// A pair was built from pawns that cannot form one.
    #[error("invalid pair: {0}")]
    InvalidPair(String),

    /// The nearby strategy was asked to work without any pawns.
    #[error("player has no pawns on the board")]
    NoPawns,

    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coord),

    #[error("cell {0} is already occupied")]
    Occupied(Coord),

    #[error("failed to parse board: {0}")]
    Parse(String),
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
