//! Tests for the terminal app: name entry, key handling and rendering.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use tictactoe::{App, Match, Screen, draw};
use tictactoe_engine::{Coord, Mark, Outcome};

fn playing(app: &App) -> &Match {
    match app.screen() {
        Screen::Playing(game) => game,
        Screen::Naming(_) => panic!("Expected game screen"),
    }
}

fn new_game() -> App {
    App::new(
        Some("Alice".to_string()),
        Some("Bob".to_string()),
        "Player X",
        "Player O",
    )
}

fn press(app: &mut App, keys: &[KeyCode]) {
    for &key in keys {
        app.handle_key(key);
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("test terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_names_collected_in_order() {
    let mut app = App::new(None, None, "Player X", "Player O");
    type_text(&mut app, "Alice");
    press(&mut app, &[KeyCode::Enter]);

    match app.screen() {
        Screen::Naming(prompt) => {
            assert_eq!(prompt.mark(), Mark::O);
            assert_eq!(prompt.input(), "Player O");
        }
        Screen::Playing(_) => panic!("Expected second name prompt"),
    }

    press(&mut app, &[KeyCode::Enter]);
    let game = playing(&app);
    assert_eq!(game.engine().players().x().name(), "Alice");
    assert_eq!(game.engine().players().o().name(), "Player O");
}

#[test]
fn test_typed_name_replaces_prefilled_default() {
    let mut app = App::new(None, Some("Bob".to_string()), "Player X", "Player O");
    type_text(&mut app, "Alice");
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(playing(&app).engine().players().x().name(), "Alice");
}

#[test]
fn test_untouched_prompt_accepts_default() {
    let mut app = App::new(None, Some("Bob".to_string()), "Player X", "Player O");
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(playing(&app).engine().players().x().name(), "Player X");
}

#[test]
fn test_edit_after_backspace_keeps_typed_text() {
    let mut app = App::new(None, Some("Bob".to_string()), "Player X", "Player O");
    type_text(&mut app, "Alicx");
    press(&mut app, &[KeyCode::Backspace]);
    type_text(&mut app, "e");
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(playing(&app).engine().players().x().name(), "Alice");
}

#[test]
fn test_blank_name_falls_back_to_default() {
    let mut app = App::new(None, Some("Bob".to_string()), "Player X", "Player O");
    type_text(&mut app, "   ");
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(playing(&app).engine().players().x().name(), "Player X");
}

#[test]
fn test_blank_cli_name_falls_back_to_default() {
    let app = App::new(Some(String::new()), Some("Bob".to_string()), "Player X", "Player O");
    assert_eq!(playing(&app).engine().players().x().name(), "Player X");
}

#[test]
fn test_escape_during_naming_quits() {
    let mut app = App::new(None, None, "Player X", "Player O");
    press(&mut app, &[KeyCode::Esc]);
    assert!(app.should_quit());
}

#[test]
fn test_keypad_win() {
    let mut app = new_game();
    // X: 1, 2, 3 (top row). O: 5, 4.
    type_text(&mut app, "15243");

    let state = playing(&app).engine().state();
    assert_eq!(state.outcome().winner(), Some(Mark::X));
    assert_eq!(playing(&app).engine().banner().to_string(), "Alice wins!");
}

#[test]
fn test_cursor_placement() {
    let mut app = new_game();
    assert_eq!(playing(&app).cursor(), Coord::CENTER);

    press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
    let state = playing(&app).engine().state();
    assert_eq!(state.board().get(Coord::TOP_LEFT).mark(), Some(Mark::X));
    assert_eq!(state.current_mark(), Mark::O);
}

#[test]
fn test_rejected_placement_sets_hint() {
    let mut app = new_game();
    type_text(&mut app, "55");

    let game = playing(&app);
    assert_eq!(game.engine().state().turn_count(), 1);
    assert_eq!(game.hint(), Some("Center (1, 1) is already taken"));

    type_text(&mut app, "1");
    assert_eq!(playing(&app).hint(), None);
}

#[test]
fn test_pause_blocks_keys_until_resumed() {
    let mut app = new_game();
    type_text(&mut app, "p5");
    assert_eq!(playing(&app).engine().state().turn_count(), 0);
    assert_eq!(
        playing(&app).hint(),
        Some("No moves allowed: game is paused")
    );

    type_text(&mut app, "p5");
    assert_eq!(playing(&app).engine().state().turn_count(), 1);
}

#[test]
fn test_restart_clears_board() {
    let mut app = new_game();
    type_text(&mut app, "1234r");

    let state = playing(&app).engine().state();
    assert_eq!(state.turn_count(), 0);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(state.current_mark(), Mark::X);
}

#[test]
fn test_q_exits() {
    let mut app = new_game();
    type_text(&mut app, "q");
    assert!(app.should_quit());
}

#[test]
fn test_render_turn_banner() {
    let app = new_game();
    let screen = render(&app);
    assert!(screen.contains("Alice's turn"), "{screen}");
    assert!(screen.contains("R: Restart"));
}

#[test]
fn test_render_paused_and_result() {
    let mut app = new_game();
    type_text(&mut app, "p");
    assert!(render(&app).contains("Game Paused"));

    type_text(&mut app, "p15243");
    let screen = render(&app);
    assert!(screen.contains("Alice wins!"), "{screen}");
}

#[test]
fn test_render_name_prompt() {
    let app = App::new(None, None, "Player X", "Player O");
    let screen = render(&app);
    assert!(screen.contains("Tic Tac Toe"), "{screen}");
    assert!(screen.contains("Enter Player 1 Name:"), "{screen}");
    assert!(screen.contains("Player X_"));
    assert!(screen.contains("Esc: Exit"), "{screen}");
}
