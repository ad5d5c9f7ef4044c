//! # Connect Four
//!
//! Rules engine for two-player Connect Four on a board of configurable size,
//! plus a terminal UI built with Ratatui that drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: dimensions, board, player, state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`ui`] — Terminal UI: presentation layer over [`game::GameState`]
//!
//! ```
//! use connect_four::game::{Dimensions, GameState, MoveOutcome, MoveResult, Player};
//!
//! let mut game = GameState::new(Dimensions::default());
//! let outcome = game.apply_move_mut(3).unwrap();
//! assert_eq!(
//!     outcome,
//!     MoveOutcome::Placed { row: 5, column: 3, result: MoveResult::Continue(Player::Two) }
//! );
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
