//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, Match, NamePrompt, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Coord, Highlight, Mark, Outcome};

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Draws the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Naming(prompt) => draw_prompt(frame, prompt),
        Screen::Playing(game) => draw_game(frame, game),
    }
}

fn draw_prompt(frame: &mut Frame, prompt: &NamePrompt) {
    let area = center_rect(frame.area(), 44, 7);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Input
            Constraint::Length(2), // Controls
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let text = Paragraph::new(format!("{}_", prompt.input()))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(prompt.label()),
        );
    frame.render_widget(text, chunks[1]);

    let controls = Paragraph::new("Enter: Start Game | Esc: Exit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);
}

fn draw_game(frame: &mut Frame, game: &Match) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Hint
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let engine = game.engine();
    let banner_color = match engine.state().outcome() {
        Outcome::InProgress => Color::White,
        Outcome::Win { .. } => Color::Green,
        Outcome::Tie => ORANGE,
    };
    let banner = Paragraph::new(engine.banner().to_string())
        .style(Style::default().fg(banner_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
    frame.render_widget(banner, chunks[0]);

    draw_board(frame, chunks[1], game);

    if let Some(hint) = game.hint() {
        let hint = Paragraph::new(hint)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);
    }

    let pause = if engine.state().is_paused() { "Resume" } else { "Pause" };
    let controls = Paragraph::new(format!(
        "Arrows/1-9: Select | Enter: Place | R: Restart | P: {} | Q: Exit",
        pause
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &Match) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..Coord::SIZE {
        draw_row(frame, rows[row * 2], game, row);
        if row + 1 < Coord::SIZE {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, game: &Match, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..Coord::SIZE {
        if let Some(coord) = Coord::new(row, col) {
            draw_cell(frame, cols[col * 2], game, coord);
        }
        if col + 1 < Coord::SIZE {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, game: &Match, coord: Coord) {
    let state = game.engine().state();

    let (symbol, mut style) = match state.board().get(coord) {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => ("X", mark_style(Color::Blue)),
        Cell::Occupied(Mark::O) => ("O", mark_style(Color::Red)),
    };

    style = match state.highlight(coord) {
        Highlight::Winning => style.fg(Color::Green).bg(Color::Gray),
        Highlight::Tie => style.fg(ORANGE).bg(Color::Gray),
        Highlight::None => style,
    };

    if coord == game.cursor() && !state.is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("    {}     ", symbol), style)),
        Line::from(""),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn mark_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
