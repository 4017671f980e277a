//! Property tests over random move and jump sequences.

use proptest::prelude::*;

use tictactoe_engine::core::{Board, Cell, CellIndex, Mark};
use tictactoe_engine::engine::{Game, GameSnapshot, MoveOutcome};
use tictactoe_engine::play::{wander, RandomPlayer};
use tictactoe_engine::rules::{evaluate_status, GameStatus};

/// An input event as a renderer would deliver it.
#[derive(Clone, Debug)]
enum Input {
    Click(usize),
    Jump(usize),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        3 => (0usize..9).prop_map(Input::Click),
        1 => (0usize..10).prop_map(Input::Jump),
    ]
}

fn arbitrary_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Marked(Mark::X)),
        Just(Cell::Marked(Mark::O)),
    ])
    .prop_map(Board::from_cells)
}

fn drive(game: &mut Game, inputs: &[Input]) {
    for event in inputs {
        match *event {
            Input::Click(cell) => {
                game.apply_move(cell).unwrap();
            }
            Input::Jump(index) => {
                let _ = game.jump_to(index);
            }
        }
    }
}

proptest! {
    #[test]
    fn evaluate_status_is_pure(board in arbitrary_board()) {
        prop_assert_eq!(evaluate_status(&board), evaluate_status(&board));
    }

    #[test]
    fn occupied_cell_never_changes_state(inputs in prop::collection::vec(input(), 0..40)) {
        let mut game = Game::new();
        drive(&mut game, &inputs);

        let board = game.current_board();
        for cell in CellIndex::all().filter(|&c| !board.is_empty_at(c)) {
            let before = game.snapshot();
            prop_assert!(!game.play(cell).is_applied());
            prop_assert_eq!(game.snapshot(), before);
        }
    }

    #[test]
    fn finished_game_never_changes_state(seed in any::<u64>(), cell in 0usize..9) {
        let mut game = Game::new();
        tictactoe_engine::play::play_out(&mut game, &mut RandomPlayer::new(seed));
        prop_assert!(game.status().is_over());

        let before = game.snapshot();
        let outcome = game.apply_move(cell).unwrap();
        prop_assert!(matches!(outcome, MoveOutcome::Ignored(_)));
        prop_assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn jump_then_move_truncates(
        inputs in prop::collection::vec(input(), 0..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut game = Game::new();
        drive(&mut game, &inputs);

        let k = pick.index(game.history_len());
        let kept: Vec<Board> = (0..=k).map(|i| game.board_at(i).unwrap()).collect();
        game.jump_to(k).unwrap();

        if let Some(&cell) = game.legal_moves().first() {
            prop_assert!(game.play(cell).is_applied());
            prop_assert_eq!(game.history_len(), k + 2);
            for (i, board) in kept.iter().enumerate() {
                prop_assert_eq!(game.board_at(i).unwrap(), *board);
            }
        }
    }

    #[test]
    fn mover_follows_index_parity(inputs in prop::collection::vec(input(), 0..40)) {
        let mut game = Game::new();
        drive(&mut game, &inputs);

        for index in 1..game.history_len() {
            let prev = game.board_at(index - 1).unwrap();
            let placement = game.board_at(index).unwrap().diff(&prev).unwrap();
            prop_assert_eq!(placement.mark, Mark::for_ply(index - 1, Mark::X));
        }

        if let GameStatus::InProgress(next) = game.status() {
            prop_assert_eq!(next, Mark::for_ply(game.current_index(), Mark::X));
        }
    }

    #[test]
    fn snapshot_restores_random_walks(seed in any::<u64>(), steps in 0usize..120) {
        let mut game = Game::new();
        wander(&mut game, &mut RandomPlayer::new(seed), steps, 0.25);

        let bytes = game.snapshot().to_bytes().unwrap();
        let restored = Game::from_snapshot(GameSnapshot::from_bytes(&bytes).unwrap()).unwrap();
        prop_assert_eq!(restored.view_state(), game.view_state());
    }
}
