use crate::game::{Dimensions, GameState, MoveError, MoveOutcome, MoveResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Terminal front end. Owns one game and turns key presses into engine calls;
/// all rule decisions come back from [`GameState`] as outcomes.
pub struct App {
    dims: Dimensions,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(dims: Dimensions) -> Self {
        App {
            dims,
            game_state: GameState::new(dims),
            selected_column: middle_column(dims), // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.dims.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.dims.width() {
                    self.selected_column = column;
                    self.drop_piece();
                } else {
                    self.message = Some(format!("No column {c} on this board"));
                }
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state = GameState::new(self.dims);
        self.selected_column = middle_column(self.dims);
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(MoveOutcome::Placed { result, .. }) => match result {
                MoveResult::Continue(_) => {}
                MoveResult::Win(player) => {
                    self.message = Some(format!("{player} wins!"));
                }
                MoveResult::Tie => {
                    self.message = Some("It's a tie!".to_string());
                }
            },
            Ok(MoveOutcome::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(err @ MoveError::InvalidColumn { .. }) => {
                tracing::error!(%err, "selector out of range");
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver { .. }) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

fn middle_column(dims: Dimensions) -> usize {
    (dims.width() - 1) / 2
}
