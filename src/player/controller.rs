use crate::core::{Board, Move};

/// Move-producing capability for one side of the game.
pub trait PlayerController {
    /// Picks a move for the current position. `None` resigns.
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
}
