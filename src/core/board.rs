use super::r#move::Move;
use super::types::{Grid, Mark};
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const MAX_MOVES: usize = 9;
/// Fewest total moves before either side can own a full line.
const MIN_MOVES_TO_WIN: usize = 5;

/// The live board: 3x3 grid plus the occupied-cell count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    moves: usize,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.grid[row][col]
    }

    /// Places `mark` iff the cell is in range and empty. Returns false
    /// without touching the board otherwise.
    pub fn apply_move(&mut self, mark: Mark, mv: Move) -> bool {
        if mv.row >= BOARD_SIZE || mv.col >= BOARD_SIZE {
            return false;
        }
        if self.grid[mv.row][mv.col].is_some() {
            return false;
        }
        self.grid[mv.row][mv.col] = Some(mark);
        self.moves += 1;
        true
    }

    pub fn has_win(&self, mark: Mark) -> bool {
        self.moves >= MIN_MOVES_TO_WIN && grid_has_win(&self.grid, mark)
    }

    /// Full board. Callers check wins first: the ninth move can
    /// complete a line, and the win takes priority.
    pub fn is_draw(&self) -> bool {
        self.moves == MAX_MOVES
    }

    /// Empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(MAX_MOVES - self.moves);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.grid[row][col].is_none() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    /// Overwrites the grid from a snapshot, recounting occupied cells.
    /// Only used to seed scratch boards; the live board is never
    /// reloaded mid-game.
    pub fn load_from(&mut self, grid: &Grid) {
        self.moves = 0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                self.grid[row][col] = grid[row][col];
                if self.grid[row][col].is_some() {
                    self.moves += 1;
                }
            }
        }
    }
}

/// The 8 winning lines.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Line check on a raw grid, no move-count short-circuit. The search
/// recursion calls this on its scratch grid instead of rebuilding a
/// `Board` per node.
pub fn grid_has_win(grid: &Grid, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| grid[row][col] == Some(mark)))
}

pub fn grid_is_full(grid: &Grid) -> bool {
    grid.iter().flatten().all(|cell| cell.is_some())
}
