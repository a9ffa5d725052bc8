use tracing::{debug, info, instrument, warn};

use crate::ai::MoveSelector;
use crate::board::{Board, NUM_SQUARES};
use crate::error::MoveError;
use crate::types::{Color, GameResult, GameState, TurnPhase};

/// The side clicking on the board.
pub const HUMAN: Color = Color::Black;
/// The side played by the move selector.
pub const COMPUTER: Color = Color::White;

/// Rules engine: owns the board and the turn state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Color,
    phase: TurnPhase,
    is_pass: bool,
    flipped: Vec<u8>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Board::new(), HUMAN)
    }

    /// Starts from an arbitrary position and resolves whose turn it really is.
    pub fn from_position(board: Board, current_player: Color) -> Self {
        let mut game = Self {
            board,
            current_player,
            phase: phase_for(current_player),
            is_pass: false,
            flipped: Vec::new(),
        };
        game.resolve_turn();
        game
    }

    /// Back to the starting position with black to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    pub fn flipped(&self) -> &[u8] {
        &self.flipped
    }

    pub fn is_valid_move(&self, index: usize, color: Color) -> bool {
        self.board.is_valid_move(index, color)
    }

    pub fn has_valid_moves(&self, color: Color) -> bool {
        self.board.has_valid_moves(color)
    }

    /// Valid cells for whoever is to move. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<usize> {
        match self.phase {
            TurnPhase::GameOver => Vec::new(),
            _ => self.board.valid_moves(self.current_player),
        }
    }

    /// Neither side can move. A full board is one instance of this.
    pub fn is_game_over(&self) -> bool {
        !self.board.has_valid_moves(Color::Black) && !self.board.has_valid_moves(Color::White)
    }

    /// Returns `(black_count, white_count)`.
    pub fn tally(&self) -> (u8, u8) {
        self.board.tally()
    }

    /// Final result, available only after the game is over.
    pub fn result(&self) -> Option<GameResult> {
        (self.phase == TurnPhase::GameOver).then(|| {
            let (black_count, white_count) = self.board.tally();
            GameResult::from_counts(black_count, white_count)
        })
    }

    /// Applies a move request coming from the board click.
    /// Returns the flipped cells.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play_human(&mut self, index: usize) -> Result<Vec<usize>, MoveError> {
        match self.phase {
            TurnPhase::GameOver => return Err(MoveError::GameOver),
            TurnPhase::AiTurn => return Err(MoveError::NotYourTurn),
            TurnPhase::HumanTurn => {}
        }
        if index >= NUM_SQUARES {
            return Err(MoveError::OutOfRange(index));
        }
        if self.board.cell(index).is_some() {
            return Err(MoveError::Occupied(index));
        }
        if !self.board.is_valid_move(index, HUMAN) {
            return Err(MoveError::NoBracket(index));
        }

        Ok(self.apply(index, HUMAN))
    }

    /// Lets `selector` play for the computer.
    /// Returns the cell played, or `None` when the computer had to pass.
    #[instrument(skip(self, selector), fields(phase = ?self.phase))]
    pub fn play_ai(&mut self, selector: &dyn MoveSelector) -> Result<Option<usize>, MoveError> {
        match self.phase {
            TurnPhase::GameOver => return Err(MoveError::GameOver),
            TurnPhase::HumanTurn => return Err(MoveError::NotYourTurn),
            TurnPhase::AiTurn => {}
        }

        if !self.board.has_valid_moves(COMPUTER) {
            debug!("computer has no valid move, passing");
            self.pass();
            return Ok(None);
        }

        let selected = selector
            .select_move(&self.board, COMPUTER)
            .ok_or(MoveError::NoSelection)?;
        if selected >= NUM_SQUARES || !self.board.is_valid_move(selected, COMPUTER) {
            warn!(selected, "move selector returned an illegal cell");
            return Err(MoveError::SelectorIllegal(selected));
        }

        self.apply(selected, COMPUTER);
        Ok(Some(selected))
    }

    /// Settles whose turn it is after a move, a pass or a fresh position.
    ///
    /// Skips a player without moves. Two iterations suffice: once the game is
    /// known not to be over, one of the two sides can move.
    pub fn resolve_turn(&mut self) -> TurnPhase {
        for _ in 0..2 {
            if self.is_game_over() {
                let (black, white) = self.board.tally();
                info!(black, white, "game over");
                self.phase = TurnPhase::GameOver;
                return self.phase;
            }
            if self.board.has_valid_moves(self.current_player) {
                self.phase = phase_for(self.current_player);
                return self.phase;
            }
            debug!(player = %self.current_player, "no valid move, turn passes");
            self.current_player = self.current_player.opponent();
            self.is_pass = true;
        }

        self.phase = TurnPhase::GameOver;
        self.phase
    }

    /// Render snapshot for the presentation shell.
    pub fn state(&self) -> GameState {
        let (black_count, white_count) = self.board.tally();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            phase: self.phase,
            black_count,
            white_count,
            valid_moves: self.valid_moves().into_iter().map(|i| i as u8).collect(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    fn apply(&mut self, index: usize, color: Color) -> Vec<usize> {
        let flips = self.board.apply_move(index, color);
        debug!(index, %color, flipped = flips.len(), "move applied\n{}", self.board);

        self.is_pass = false;
        self.flipped = flips.iter().map(|&i| i as u8).collect();
        self.current_player = color.opponent();
        self.resolve_turn();
        flips
    }

    fn pass(&mut self) {
        self.is_pass = true;
        self.current_player = self.current_player.opponent();
        self.resolve_turn();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn phase_for(player: Color) -> TurnPhase {
    if player == HUMAN {
        TurnPhase::HumanTurn
    } else {
        TurnPhase::AiTurn
    }
}
