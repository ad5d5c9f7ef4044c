use std::fmt;

use super::{Board, Dimensions, Player, Ray};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Won(player) => write!(f, "won by {player}"),
            GameStatus::Tied => f.write_str("tied"),
        }
    }
}

/// What an accepted move led to. Exactly one per placed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Game goes on; the contained player moves next.
    Continue(Player),
    Win(Player),
    Tie,
}

/// Result of dropping a piece into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Column had no empty cell. Nothing changed.
    ColumnFull,
    Placed {
        row: usize,
        column: usize,
        result: MoveResult,
    },
}

/// Board plus turn bookkeeping for one game.
///
/// Each value is an independent game. There is no shared board: callers own
/// their state and either mutate it ([`GameState::apply_move_mut`]) or derive
/// a successor ([`GameState::apply_move`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Start a game on an empty board. Player 1 moves first.
    pub fn new(dims: Dimensions) -> Self {
        tracing::info!(%dims, "new game");
        GameState {
            board: Board::new(dims),
            active_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Create initial game state on the default 7x6 board
    pub fn initial() -> Self {
        Self::new(Dimensions::default())
    }

    /// Player whose turn it is. After a win this stays on the winner.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Columns a move may currently go into. Empty once the game is over.
    pub fn playable_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.playable_columns()
    }

    /// The four cells that decided the game, if it was won.
    pub fn winning_ray(&self) -> Option<Ray> {
        match self.status {
            GameStatus::Won(player) => self.board.winning_ray(player),
            _ => None,
        }
    }

    /// Apply a move and return the new state alongside the outcome (immutable)
    pub fn apply_move(&self, column: usize) -> Result<(GameState, MoveOutcome), MoveError> {
        let mut next = self.clone();
        let outcome = next.apply_move_mut(column)?;
        Ok((next, outcome))
    }

    /// Drop the active player's piece into `column`.
    ///
    /// Errors leave the state untouched, as does [`MoveOutcome::ColumnFull`].
    /// The win check runs before the tie check, so a move that both fills the
    /// board and completes a line is a win.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }

        let player = self.active_player;
        let Some(row) = self.board.drop_piece(column, player)? else {
            tracing::debug!(column, %player, "column full, move rejected");
            return Ok(MoveOutcome::ColumnFull);
        };

        let result = if self.board.check_win(player) {
            self.status = GameStatus::Won(player);
            MoveResult::Win(player)
        } else if self.board.is_top_row_full() {
            self.status = GameStatus::Tied;
            MoveResult::Tie
        } else {
            self.active_player = player.other();
            MoveResult::Continue(self.active_player)
        };

        tracing::debug!(row, column, %player, ?result, "piece placed");
        tracing::trace!("board:\n{}", self.board);
        if self.is_terminal() {
            tracing::info!(status = %self.status, "game over");
        }

        Ok(MoveOutcome::Placed {
            row,
            column,
            result,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
