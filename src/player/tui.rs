use crate::core::{Board, Mark, Move, BOARD_SIZE};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub struct TuiController {
    mark: Mark,
    name: String,
}

impl TuiController {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move> {
        // Start on the center if it is still open, else the first
        // empty cell.
        let mut cursor = legal_moves
            .iter()
            .copied()
            .find(|&mv| mv == Move::new(1, 1))
            .or_else(|| legal_moves.first().copied())
            .unwrap_or_default();

        let mut state = DisplayState::default();
        state.status_msg = Some(format!("{}'s turn ({})", self.name, self.mark));

        loop {
            state.cursor = Some(cursor);
            render_board(board, &state);
            print!("[Arrows]: Move | [1-9]: Place | [Enter]: Select | [q]: Resign\r\n");

            if event::poll(Duration::from_millis(100)).unwrap() {
                if let Event::Key(KeyEvent { code, .. }) = event::read().unwrap() {
                    match code {
                        KeyCode::Char('q') => return None,
                        KeyCode::Up => {
                            if cursor.row > 0 {
                                cursor.row -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if cursor.row < BOARD_SIZE - 1 {
                                cursor.row += 1;
                            }
                        }
                        KeyCode::Left => {
                            if cursor.col > 0 {
                                cursor.col -= 1;
                            }
                        }
                        KeyCode::Right => {
                            if cursor.col < BOARD_SIZE - 1 {
                                cursor.col += 1;
                            }
                        }
                        KeyCode::Char(c @ '1'..='9') => {
                            if let Some(mv) = Move::from_key(c as usize - '0' as usize) {
                                if legal_moves.contains(&mv) {
                                    return Some(mv);
                                }
                                cursor = mv;
                                state.status_msg =
                                    Some("Position already taken. Try again.".to_string());
                            }
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            if legal_moves.contains(&cursor) {
                                return Some(cursor);
                            }
                            state.status_msg =
                                Some("Position already taken. Try again.".to_string());
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
