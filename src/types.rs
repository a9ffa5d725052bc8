use std::fmt;

use serde::Serialize;

use crate::board::BOARD_SIZE;

/// Disk color. Also identifies the player owning that color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Render code used by the board projection: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("black"),
            Self::White => f.write_str("white"),
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Draw,
}

impl Winner {
    pub fn from_counts(black_count: u8, white_count: u8) -> Self {
        match black_count.cmp(&white_count) {
            std::cmp::Ordering::Greater => Self::Black,
            std::cmp::Ordering::Less => Self::White,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }
}

/// Where the turn state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    HumanTurn,
    AiTurn,
    GameOver,
}

/// Render snapshot handed to the presentation shell after every state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 0=empty, 1=black, 2=white, row-major.
    pub board: Vec<u8>,
    pub current_player: Color,
    pub phase: TurnPhase,
    pub black_count: u8,
    pub white_count: u8,
    /// Valid cells for `current_player`, used for highlighting.
    pub valid_moves: Vec<u8>,
    /// Contract:
    /// - `true` when settling the turn after the last move skipped a player.
    /// - `false` when the turn simply alternated.
    pub is_pass: bool,
    /// Contract:
    /// - Cells flipped by the most recent move (0..=63).
    /// - Empty before the first move.
    pub flipped: Vec<u8>,
}

/// Final tally delivered once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Winner,
    pub black_count: u8,
    pub white_count: u8,
}

impl GameResult {
    pub fn from_counts(black_count: u8, white_count: u8) -> Self {
        Self {
            winner: Winner::from_counts(black_count, white_count),
            black_count,
            white_count,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Winner::Black => f.write_str("Player (black) wins!")?,
            Winner::White => f.write_str("Computer (white) wins!")?,
            Winner::Draw => f.write_str("Draw!")?,
        }
        write!(f, " Black: {} White: {}", self.black_count, self.white_count)
    }
}
