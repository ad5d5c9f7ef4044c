//! Terminal UI: the presentation layer that drives the game engine from key
//! presses and renders the board and game outcome.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
pub use game_view::status_text;
