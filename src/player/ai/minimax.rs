use crate::core::{grid_has_win, grid_is_full, Board, Grid, Mark, Move, BOARD_SIZE};
use crate::player::PlayerController;

/// Exhaustive alpha-beta opponent. Plays an optimal line, and among
/// optimal lines prefers the fastest win and the slowest loss.
pub struct MinimaxAI {
    mark: Mark,
    name: String,
}

impl MinimaxAI {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, _legal_moves: &[Move]) -> Option<Move> {
        Some(best_move(board, self.mark))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Picks the highest-scoring cell for `mark`. Cells are scanned in
/// row-major order and only a strictly better score replaces the
/// candidate, so ties resolve to the first cell found.
///
/// Panics on a full board: the game loop stops on the ninth move, so
/// a full board here is a caller bug.
pub fn best_move(board: &Board, mark: Mark) -> Move {
    let mut grid = board.snapshot();
    let mut best: Option<(i32, Move)> = None;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if grid[row][col].is_none() {
                grid[row][col] = Some(mark);
                let score = minimax(&mut grid, mark, false, 0, i32::MIN, i32::MAX);
                grid[row][col] = None;

                if best.map_or(true, |(s, _)| score > s) {
                    best = Some((score, Move::new(row, col)));
                }
            }
        }
    }

    match best {
        Some((_, mv)) => mv,
        None => panic!("best_move called on a full board"),
    }
}

/// Terminal scores are depth-shaped: a win reached at depth d is
/// `10 - d`, a loss `d - 10`, a full board 0. The searching mark's win
/// is checked before the opponent's, and wins before the full-board
/// draw.
fn minimax(
    grid: &mut Grid,
    mark: Mark,
    maximizing: bool,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if grid_has_win(grid, mark) {
        return 10 - depth;
    }
    if grid_has_win(grid, mark.opponent()) {
        return depth - 10;
    }
    if grid_is_full(grid) {
        return 0;
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if grid[row][col].is_none() {
                    grid[row][col] = Some(mark);
                    let eval = minimax(grid, mark, false, depth + 1, alpha, beta);
                    grid[row][col] = None;
                    max_eval = max_eval.max(eval);
                    alpha = alpha.max(eval);
                    if beta <= alpha {
                        return max_eval;
                    }
                }
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if grid[row][col].is_none() {
                    grid[row][col] = Some(mark.opponent());
                    let eval = minimax(grid, mark, true, depth + 1, alpha, beta);
                    grid[row][col] = None;
                    min_eval = min_eval.min(eval);
                    beta = beta.min(eval);
                    if beta <= alpha {
                        return min_eval;
                    }
                }
            }
        }
        min_eval
    }
}
