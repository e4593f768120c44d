//! Scenario and property tests for the game engine.

use tictactoe_engine::{
    Board, Cell, Coord, GameEngine, GameState, Highlight, InactiveReason, Mark, Outcome,
    PlacementError,
};

fn new_game() -> GameEngine {
    GameEngine::with_names("Alice", "Bob")
}

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        engine.place_mark(row, col).expect("legal move");
    }
}

const TOP_ROW_WIN: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];

// Ends as X O X / X O X / O X O.
const TIE_GAME: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (2, 0),
    (1, 2),
    (2, 2),
    (2, 1),
];

#[test]
fn test_top_row_win() {
    let mut engine = new_game();
    play(&mut engine, &TOP_ROW_WIN[..4]);
    assert_eq!(engine.state().outcome(), Outcome::InProgress);

    let (row, col) = TOP_ROW_WIN[4];
    let effect = engine.place_mark(row, col).expect("winning move");

    match effect.outcome() {
        Outcome::Win { mark, line } => {
            assert_eq!(*mark, Mark::X);
            assert_eq!(
                line.coords(),
                &[Coord::TOP_LEFT, Coord::TOP_CENTER, Coord::TOP_RIGHT]
            );
        }
        other => panic!("Expected a win, got {other:?}"),
    }
    assert_eq!(engine.state().turn_count(), 5);
}

#[test]
fn test_tie_game() {
    let mut engine = new_game();
    play(&mut engine, &TIE_GAME[..8]);
    assert_eq!(engine.state().outcome(), Outcome::InProgress);

    let (row, col) = TIE_GAME[8];
    let effect = engine.place_mark(row, col).expect("last move");
    assert_eq!(*effect.outcome(), Outcome::Tie);

    let state = engine.state();
    assert_eq!(state.turn_count(), 9);
    assert!(state.board().cells().iter().all(|cell| !cell.is_empty()));

    #[rustfmt::skip]
    let expected = [
        Mark::X, Mark::O, Mark::X,
        Mark::X, Mark::O, Mark::X,
        Mark::O, Mark::X, Mark::O,
    ];
    for (coord, mark) in Coord::ALL.into_iter().zip(expected) {
        assert_eq!(state.board().get(coord), Cell::Occupied(mark), "at {coord}");
    }
}

#[test]
fn test_tie_game_in_progress_until_ninth_move() {
    // No prefix of TIE_GAME completes a line.
    let mut engine = new_game();
    for (turn, &(row, col)) in TIE_GAME.iter().enumerate() {
        let effect = engine.place_mark(row, col).expect("legal move");
        let expected = if turn == 8 { Outcome::Tie } else { Outcome::InProgress };
        assert_eq!(*effect.outcome(), expected);
        assert_eq!(usize::from(engine.state().turn_count()), turn + 1);
    }
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = new_game();
    play(&mut engine, &[(1, 1)]);
    let before = engine.state();

    assert_eq!(
        engine.place_mark(3, 0),
        Err(PlacementError::InvalidCoordinate { row: 3, col: 0 })
    );
    assert_eq!(
        engine.place_mark(0, 7),
        Err(PlacementError::InvalidCoordinate { row: 0, col: 7 })
    );
    assert_eq!(engine.state(), before);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut engine = new_game();
    play(&mut engine, &[(1, 1), (0, 0)]);
    let before = engine.state();

    for (row, col) in [(1, 1), (0, 0)] {
        assert_eq!(
            engine.place_mark(row, col),
            Err(PlacementError::CellOccupied(Coord::new(row, col).expect("on board")))
        );
    }
    assert_eq!(engine.state(), before);
    assert_eq!(engine.state().turn_count(), 2);
}

#[test]
fn test_paused_game_rejects_placements() {
    let mut engine = new_game();
    play(&mut engine, &[(1, 1)]);
    engine.toggle_pause();
    let before = engine.state();

    for coord in Coord::ALL {
        assert_eq!(
            engine.place_mark(coord.row(), coord.col()),
            Err(PlacementError::GameNotActive(InactiveReason::Paused))
        );
    }
    assert_eq!(engine.state(), before);

    engine.toggle_pause();
    assert!(engine.place_mark(0, 0).is_ok());
}

#[test]
fn test_finished_game_rejects_placements() {
    let mut engine = new_game();
    play(&mut engine, &TOP_ROW_WIN);
    let before = engine.state();

    for coord in Coord::ALL {
        assert_eq!(
            engine.place_mark(coord.row(), coord.col()),
            Err(PlacementError::GameNotActive(InactiveReason::Finished))
        );
    }
    assert_eq!(engine.state(), before);
}

#[test]
fn test_double_toggle_is_noop() {
    let mut engine = new_game();
    play(&mut engine, &[(0, 0), (2, 2)]);
    let before = engine.state();

    engine.toggle_pause();
    assert!(engine.state().is_paused());
    assert_eq!(engine.state().board(), before.board());
    assert_eq!(engine.state().turn_count(), before.turn_count());

    engine.toggle_pause();
    assert_eq!(engine.state(), before);
}

#[test]
fn test_pause_allowed_on_finished_game() {
    let mut engine = new_game();
    play(&mut engine, &TOP_ROW_WIN);
    let outcome = engine.state().outcome();

    engine.toggle_pause();
    assert!(engine.state().is_paused());
    assert_eq!(engine.state().outcome(), outcome);

    engine.toggle_pause();
    assert!(!engine.state().is_paused());
}

fn assert_fresh(state: &GameState) {
    assert_eq!(state.board(), &Board::new());
    assert_eq!(state.turn_count(), 0);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(state.current_mark(), Mark::X);
    assert!(!state.is_paused());
}

#[test]
fn test_reset_mid_game() {
    let mut engine = new_game();
    play(&mut engine, &[(0, 0), (1, 1), (2, 2), (0, 2)]);
    assert_eq!(engine.state().turn_count(), 4);
    assert_eq!(engine.state().current_mark(), Mark::X);

    play(&mut engine, &[(2, 0)]);
    assert_eq!(engine.state().current_mark(), Mark::O);

    engine.reset();
    assert_fresh(&engine.state());
}

#[test]
fn test_reset_after_win_while_paused() {
    let mut engine = new_game();
    play(&mut engine, &TOP_ROW_WIN);
    engine.toggle_pause();

    engine.reset();
    assert_fresh(&engine.state());
    assert_eq!(engine.players().x().name(), "Alice");
    assert!(engine.place_mark(1, 1).is_ok());
}

#[test]
fn test_highlights_follow_outcome() {
    let mut engine = new_game();
    play(&mut engine, &TOP_ROW_WIN);
    let state = engine.state();
    assert_eq!(state.highlight(Coord::TOP_RIGHT), Highlight::Winning);
    assert_eq!(state.highlight(Coord::CENTER), Highlight::None);

    engine.reset();
    play(&mut engine, &TIE_GAME);
    let state = engine.state();
    assert!(
        Coord::ALL
            .into_iter()
            .all(|coord| state.highlight(coord) == Highlight::Tie)
    );
}

#[test]
fn test_o_can_win() {
    let mut engine = new_game();
    play(&mut engine, &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)]);
    let state = engine.state();
    assert_eq!(state.outcome().winner(), Some(Mark::O));
    assert_eq!(state.current_mark(), Mark::O);
    assert_eq!(engine.banner().to_string(), "Bob wins!");
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = new_game();
    play(&mut engine, &[(1, 1)]);

    let json = serde_json::to_value(engine.state()).expect("serializable");
    assert_eq!(json["turn_count"], 1);
    assert_eq!(json["current_mark"], "O");
    assert_eq!(json["is_paused"], false);
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["board"]["cells"][4]["Occupied"], "X");
    assert_eq!(json["board"]["cells"][0], "Empty");
}
