use thiserror::Error;

/// Why a move request was not applied.
///
/// The presentation shell only needs accepted/ignored, but the engine keeps the
/// reason for logs and tests.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("it is not the player's turn")]
    NotYourTurn,

    #[error("cell index {0} is outside the board")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    Occupied(usize),

    #[error("cell {0} does not bracket any opponent disk")]
    NoBracket(usize),

    #[error("move selector returned no move")]
    NoSelection,

    #[error("move selector returned illegal cell {0}")]
    SelectorIllegal(usize),
}
