//! Core Connect Four game logic: board dimensions, board, player types, and
//! the game state machine with win/tie detection.

mod board;
mod dimensions;
mod player;
mod state;

pub use board::{Board, Cell, Ray, DIRECTIONS, WIN_LENGTH};
pub use dimensions::{Dimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveOutcome, MoveResult};

pub use crate::error::MoveError;
