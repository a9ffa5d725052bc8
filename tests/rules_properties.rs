use othello::board::{Board, NUM_SQUARES};
use othello::{Color, Game, TurnPhase};
use proptest::prelude::*;

/// Plays out a game prefix, using each choice to index into the side's valid moves.
fn replay(choices: &[usize]) -> (Board, Color) {
    let mut board = Board::new();
    let mut color = Color::Black;

    for &choice in choices {
        let mut moves = board.valid_moves(color);
        if moves.is_empty() {
            color = color.opponent();
            moves = board.valid_moves(color);
            if moves.is_empty() {
                break;
            }
        }
        board.apply_move(moves[choice % moves.len()], color);
        color = color.opponent();
    }

    (board, color)
}

fn positions() -> impl Strategy<Value = (Board, Color)> {
    prop::collection::vec(0usize..64, 0..60).prop_map(|choices| replay(&choices))
}

proptest! {
    #[test]
    fn occupied_cells_are_never_valid((board, _) in positions()) {
        for index in 0..NUM_SQUARES {
            if board.cell(index).is_some() {
                prop_assert!(!board.is_valid_move(index, Color::Black));
                prop_assert!(!board.is_valid_move(index, Color::White));
            }
        }
    }

    #[test]
    fn validity_queries_leave_board_untouched((board, color) in positions()) {
        let before = board;
        for _ in 0..3 {
            for index in 0..NUM_SQUARES {
                let _ = board.is_valid_move(index, color);
                let _ = board.has_valid_moves(color.opponent());
            }
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn valid_move_always_flips_and_never_removes((board, color) in positions(), pick in 0usize..64) {
        let moves = board.valid_moves(color);
        prop_assume!(!moves.is_empty());
        let index = moves[pick % moves.len()];

        let mut after = board;
        let flips = after.apply_move(index, color);

        prop_assert!(!flips.is_empty());
        prop_assert_eq!(after.cell(index), Some(color));
        for cell in 0..NUM_SQUARES {
            if board.cell(cell).is_some() {
                prop_assert!(after.cell(cell).is_some());
            }
        }
        for &cell in &flips {
            prop_assert_eq!(board.cell(cell), Some(color.opponent()));
            prop_assert_eq!(after.cell(cell), Some(color));
        }
        let (black, white) = after.tally();
        let (black_before, white_before) = board.tally();
        prop_assert_eq!(black as usize + white as usize, black_before as usize + white_before as usize + 1);
    }

    #[test]
    fn invalid_empty_cell_flips_nothing((board, color) in positions()) {
        for index in 0..NUM_SQUARES {
            if board.cell(index).is_none() && !board.is_valid_move(index, color) {
                prop_assert!(board.flips_for(index, color).is_empty());
            }
        }
    }

    #[test]
    fn game_over_matches_move_availability((board, color) in positions()) {
        let game = Game::from_position(board, color);
        let stuck = !board.has_valid_moves(Color::Black) && !board.has_valid_moves(Color::White);

        prop_assert_eq!(game.is_game_over(), stuck);
        prop_assert_eq!(game.phase() == TurnPhase::GameOver, stuck);
        prop_assert_eq!(game.result().is_some(), stuck);
        if !stuck {
            prop_assert!(game.has_valid_moves(game.current_player()));
        }
    }
}
