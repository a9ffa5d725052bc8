use wasm_bindgen::prelude::*;

pub mod ai;
pub mod api;
pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod session;
pub mod types;

pub use board::Board;
pub use error::MoveError;
pub use game::Game;
pub use types::{Color, GameResult, GameState, TurnPhase, Winner};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
