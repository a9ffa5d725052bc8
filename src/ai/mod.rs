pub mod random;

use crate::board::Board;
use crate::types::Color;

pub use random::RandomMoveSelector;

/// Chooses the computer's move. `None` means `color` has no legal move.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, color: Color) -> Option<usize>;
}

/// Always plays the lowest-index legal cell. Deterministic, handy for tests and replays.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, board: &Board, color: Color) -> Option<usize> {
        board.valid_moves(color).first().copied()
    }
}
