//! Property tests for win detection and the history store.

use proptest::prelude::*;
use rewind_tictactoe::{
    check_winner, Board, HistoryInvariants, HistoryStore, InvariantSet, PlayError, Player,
    Position, SortOrder, Square, LINES,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from)
}

/// A session action: play a cell, jump to an entry (taken modulo length), or toggle sort.
#[derive(Debug, Clone)]
enum Action {
    Play(usize),
    Jump(usize),
    Toggle,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..9).prop_map(Action::Play),
        2 => (0usize..10).prop_map(Action::Jump),
        1 => Just(Action::Toggle),
    ]
}

fn has_three_in_a_row(board: &Board) -> bool {
    LINES.iter().any(|[a, b, c]| {
        board.get(*a) != Square::Empty
            && board.get(*a) == board.get(*b)
            && board.get(*b) == board.get(*c)
    })
}

proptest! {
    #[test]
    fn prop_winner_iff_three_in_a_row(board in board()) {
        prop_assert_eq!(check_winner(&board).is_some(), has_three_in_a_row(&board));
    }

    #[test]
    fn prop_winning_line_is_uniform(board in board()) {
        if let Some(line) = check_winner(&board) {
            for pos in line.positions {
                prop_assert_eq!(board.get(pos), Square::Occupied(line.player));
            }
        }
    }

    #[test]
    fn prop_session_preserves_invariants(actions in proptest::collection::vec(action(), 0..40)) {
        let mut store = HistoryStore::new();

        for action in actions {
            match action {
                Action::Play(idx) => {
                    let before = (store.history().to_vec(), store.cursor());
                    let outcome = store.play_index(idx).map(|_| ());
                    match outcome {
                        Ok(_) => {
                            prop_assert_eq!(store.history().len(), store.cursor() + 1);
                        }
                        Err(PlayError::SquareOccupied(_)) | Err(PlayError::GameOver) => {
                            prop_assert_eq!(&before.0[..], store.history());
                            prop_assert_eq!(before.1, store.cursor());
                        }
                        Err(e) => {
                            prop_assert!(false, "unexpected error: {}", e);
                        }
                    }
                }
                Action::Jump(raw) => {
                    let target = raw % store.history().len();
                    store.jump_to(target).expect("target within history");
                    prop_assert_eq!(store.current_board(), &store.history()[target]);
                }
                Action::Toggle => {
                    store.toggle_sort();
                }
            }
            prop_assert!(HistoryInvariants::check_all(&store).is_ok());
        }

        store.reset();
        prop_assert_eq!(store.history(), &[Board::new()][..]);
        prop_assert_eq!(store.cursor(), 0);
        prop_assert_eq!(store.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn prop_second_play_on_same_square_changes_nothing(idx in 0usize..9) {
        let mut store = HistoryStore::new();
        store.play_index(idx).expect("first move is always legal");
        let snapshot = store.history().to_vec();

        let position = Position::from_index(idx).expect("index below 9");
        prop_assert_eq!(store.play(position), Err(PlayError::SquareOccupied(position)));
        prop_assert_eq!(store.history(), snapshot.as_slice());
    }
}
