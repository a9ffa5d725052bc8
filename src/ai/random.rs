//! Uniform random computer player.
//!
//! Every legal cell is equally likely; no position evaluation and no seed.

use rand::seq::SliceRandom;
use tracing::debug;

use super::MoveSelector;
use crate::board::Board;
use crate::types::Color;

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMoveSelector;

impl RandomMoveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl MoveSelector for RandomMoveSelector {
    fn select_move(&self, board: &Board, color: Color) -> Option<usize> {
        let candidates = board.valid_moves(color);
        let picked = candidates.choose(&mut rand::thread_rng()).copied();
        debug!(
            %color,
            candidates = candidates.len(),
            ?picked,
            "random selector picked a move"
        );
        picked
    }
}
