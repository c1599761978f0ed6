//! Property tests over boards reached by random legal play.

use proptest::prelude::*;
use tictactoe_solver::{
    Action, Board, GameError, Outcome, Player, actions, initial_state, minimax, outcome, owns_line,
    player, result, terminal, utility, value, winner,
};

/// Plays `choices` as indices into the legal moves, stopping at a terminal
/// board. Returns every board visited, starting with the empty one.
fn play(choices: &[usize]) -> Vec<Board> {
    let mut boards = vec![initial_state()];
    let mut board = initial_state();
    for choice in choices {
        if terminal(&board) {
            break;
        }
        let legal = actions(&board);
        board = result(&board, legal[choice % legal.len()]).unwrap();
        boards.push(board);
    }
    boards
}

fn reachable_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0usize..9, 0..=9).prop_map(|choices| {
        *play(&choices).last().unwrap()
    })
}

proptest! {
    #[test]
    fn turns_alternate(choices in prop::collection::vec(0usize..9, 0..=9)) {
        let boards = play(&choices);
        prop_assert_eq!(player(&boards[0]), Player::X);
        for pair in boards.windows(2) {
            prop_assert_eq!(player(&pair[1]), player(&pair[0]).opponent());
        }
    }

    #[test]
    fn legal_moves_apply_without_mutation(board in reachable_board()) {
        let before = board;
        for action in actions(&board) {
            let after = result(&board, action).unwrap();
            prop_assert_eq!(board, before);
            prop_assert_eq!(actions(&after).len() + 1, actions(&board).len());
        }
    }

    #[test]
    fn illegal_moves_fail(board in reachable_board()) {
        let legal = actions(&board);
        for action in Action::ALL.iter().filter(|a| !legal.contains(a)) {
            prop_assert_eq!(result(&board, *action), Err(GameError::InvalidAction(*action)));
        }
    }

    #[test]
    fn at_most_one_winner(board in reachable_board()) {
        prop_assert!(!(owns_line(&board, Player::X) && owns_line(&board, Player::O)));
        prop_assert!(board.validate().is_ok());
    }

    #[test]
    fn terminal_matches_definition(board in reachable_board()) {
        let expected = winner(&board).is_some() || actions(&board).is_empty();
        prop_assert_eq!(terminal(&board), expected);
        prop_assert_eq!(outcome(&board).is_some(), expected);
    }

    #[test]
    fn utility_matches_outcome(board in reachable_board()) {
        match outcome(&board) {
            Some(Outcome::Winner(Player::X)) => prop_assert_eq!(utility(&board), Ok(1)),
            Some(Outcome::Winner(Player::O)) => prop_assert_eq!(utility(&board), Ok(-1)),
            Some(Outcome::Draw) => prop_assert_eq!(utility(&board), Ok(0)),
            None => prop_assert_eq!(utility(&board), Err(GameError::NotTerminal)),
        }
    }
}

proptest! {
    // Each case runs a full search, so keep the boards past the opening.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn minimax_move_achieves_board_value(choices in prop::collection::vec(0usize..9, 3..=9)) {
        let board = *play(&choices).last().unwrap();
        prop_assume!(!terminal(&board));

        let action = minimax(&board).unwrap();
        prop_assert!(actions(&board).contains(&action));
        let child = result(&board, action).unwrap();
        prop_assert_eq!(value(&child), value(&board));
    }
}
