use crate::core::{Board, GameResult, Mark, Move};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode};
use std::time::Duration;

/// The live game: board, side to move, and the running result.
pub struct Game {
    pub board: Board,
    pub current: Mark,
    pub result: GameResult,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current: Mark::X,
            result: GameResult::InProgress,
        }
    }

    /// Applies `mv` for the side to move, then evaluates the position:
    /// win for the mover first, draw as the fallback. Returns false
    /// with no state change if the game is over or the move is
    /// rejected by the board.
    pub fn play_turn(&mut self, mv: Move) -> bool {
        if self.result != GameResult::InProgress {
            return false;
        }
        if !self.board.apply_move(self.current, mv) {
            return false;
        }

        if self.board.has_win(self.current) {
            self.result = GameResult::Win(self.current);
        } else if self.board.is_draw() {
            self.result = GameResult::Draw;
        } else {
            self.current = self.current.opponent();
        }
        true
    }

    /// Interactive loop: render, ask the side to move for a move,
    /// apply it, repeat until the game ends or a controller resigns.
    pub fn play(&mut self, x: &dyn PlayerController, o: &dyn PlayerController) -> GameResult {
        let mut last_move: Option<Move> = None;

        while self.result == GameResult::InProgress {
            let controller = match self.current {
                Mark::X => x,
                Mark::O => o,
            };

            let mut state = DisplayState::default();
            state.last_move = last_move;
            state.status_msg = Some(format!("{}'s turn ({})", controller.name(), self.current));
            render_board(&self.board, &state);

            if controller.name().contains("AI") {
                state.status_msg = Some(format!(
                    "{} ({}) is thinking...",
                    controller.name(),
                    self.current
                ));
                render_board(&self.board, &state);

                // Check for 'q' during the thinking pause
                if event::poll(Duration::from_millis(400)).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        if key.code == KeyCode::Char('q') {
                            print!("Interrupted by user.\r\n");
                            return self.result;
                        }
                    }
                }
            }

            let moves = self.board.legal_moves();
            if let Some(mv) = controller.choose_move(&self.board, &moves) {
                if !self.play_turn(mv) {
                    // Taken cell slipped through; ask again
                    continue;
                }
                last_move = Some(mv);
            } else {
                self.result = GameResult::Win(self.current.opponent());
            }
        }

        let mut state = DisplayState::default();
        state.last_move = last_move;
        state.status_msg = Some(match self.result {
            GameResult::Win(mark) => format!("** {} WINS! **", mark),
            _ => "** It's a DRAW! **".to_string(),
        });
        render_board(&self.board, &state);
        print!("Press any key to exit.\r\n");

        loop {
            if event::poll(Duration::from_millis(100)).unwrap_or(false) && event::read().is_ok() {
                break;
            }
        }

        self.result
    }
}
