pub mod board;
pub mod r#move;
pub mod types;

pub use board::{grid_has_win, grid_is_full, Board, BOARD_SIZE, MAX_MOVES};
pub use r#move::Move;
pub use types::{GameResult, Grid, Mark};
