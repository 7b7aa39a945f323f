//! End-to-end tests for the game controller and time travel.

use tictactoe_rewind::{GameController, GameStatus, Player, Position, Square};

fn cell(index: usize) -> Position {
    Position::from_index(index).unwrap()
}

/// X 0, O 4, X 1, O 5, X 2: X takes the top row.
fn top_row_win() -> GameController {
    let mut game = GameController::new();
    for index in [0, 4, 1, 5, 2] {
        game.play(cell(index));
    }
    game
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = top_row_win();

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status_text(), "WINNER! Congratulations: X");
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.move_list().len(), 6);

    game.play(cell(3));
    assert_eq!(game.history().len(), 6);
    assert!(game.active_board().is_empty(cell(3)));
}

#[test]
fn test_jump_into_finished_game_and_branch() {
    let mut game = top_row_win();

    game.jump_to(2);
    let board = game.active_board();
    assert_eq!(board.get(cell(0)), Square::Occupied(Player::X));
    assert_eq!(board.get(cell(4)), Square::Occupied(Player::O));
    assert_eq!(board.occupied_count(), 2);
    assert!(game.x_is_next());
    assert_eq!(game.status(), GameStatus::InProgress);
    // Browsing alone keeps the recorded win.
    assert_eq!(game.history().len(), 6);

    // Center is taken at this point, so the move is ignored.
    game.play(cell(4));
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.history().cursor(), 2);

    game.play(cell(8));
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.history().cursor(), 3);
    assert_eq!(game.active_board().get(cell(8)), Square::Occupied(Player::X));
    assert!(game.active_board().is_empty(cell(1)));
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_jump_to_start_then_play_discards_everything() {
    let mut game = top_row_win();
    game.jump_to(0);
    assert_eq!(game.status_text(), "Player up next: X's");

    game.play(cell(8));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.active_board().occupied_count(), 1);
}

#[test]
fn test_view_matches_accessors() {
    let mut game = top_row_win();
    game.jump_to(3);
    let view = game.view();

    assert_eq!(view.active_board(), game.active_board());
    assert_eq!(*view.cursor(), 3);
    assert!(!*view.x_is_next());
    assert_eq!(view.status_text(), "Player up next: O's");
    assert_eq!(view.move_list().len(), 6);
    assert!(view.winning_line().is_none());
}

#[test]
fn test_view_serializes_to_json() {
    let game = top_row_win();
    let json = serde_json::to_value(game.view()).unwrap();

    assert_eq!(json["status"]["Won"], "X");
    assert_eq!(json["active_board"].as_array().unwrap().len(), 9);
    assert_eq!(json["move_list"][5]["label"], "Revert board back to move #5");
    assert_eq!(json["winning_line"]["positions"][0], "TopLeft");
}

#[test]
#[should_panic]
fn test_jump_past_history_panics() {
    let mut game = top_row_win();
    game.jump_to(6);
}
