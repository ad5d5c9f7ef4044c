use crate::game::{GameState, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, player_color};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = game_state.board().height() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    let selected = (!game_state.is_terminal()).then_some(selected_column);
    board_widget::render_board(
        frame,
        game_state.board(),
        selected,
        game_state.winning_ray().as_ref(),
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Status line shown in the header
pub fn status_text(game_state: &GameState) -> String {
    let dims = game_state.board().dimensions();
    match game_state.status() {
        GameStatus::InProgress => {
            format!("Current Player: {}  |  {dims}", game_state.active_player())
        }
        GameStatus::Won(player) => format!("Game Over: {player} wins  |  {dims}"),
        GameStatus::Tied => format!("Game Over: tie  |  {dims}"),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let color = match game_state.status() {
        GameStatus::InProgress => player_color(game_state.active_player()),
        GameStatus::Won(player) => player_color(player),
        GameStatus::Tied => Color::White,
    };

    let header = Paragraph::new(status_text(game_state))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  1-9: Drop in column  |  Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
