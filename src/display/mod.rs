use crate::core::{Board, Mark, Move, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

/// Per-frame render inputs supplied by whichever loop is drawing.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    pub cursor: Option<Move>,
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    // Repaint in place so the board does not scroll
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Tic-Tac-Toe ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    let border = format!("   +{}+\r\n", ["-----"; BOARD_SIZE].join("+"));
    print!("{}", border);

    for row in 0..BOARD_SIZE {
        print!("   |");
        for col in 0..BOARD_SIZE {
            let mv = Move::new(row, col);
            let is_cursor = state.cursor == Some(mv);
            let is_last = state.last_move == Some(mv);

            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_last {
                ("{", "}")
            } else {
                (" ", " ")
            };

            // Empty cells show their keypad digit
            let ch = match board.get(row, col) {
                Some(mark) => mark.to_string(),
                None => (row * BOARD_SIZE + col + 1).to_string(),
            };
            let text = format!("{} {} {}", prefix, ch, suffix);

            if is_cursor {
                print!("{}", text.yellow());
            } else if is_last {
                print!("{}", text.red());
            } else {
                match board.get(row, col) {
                    Some(Mark::X) => print!("{}", text.cyan()),
                    Some(Mark::O) => print!("{}", text.magenta()),
                    None => print!("{}", text.dim()),
                }
            }
            print!("|");
        }
        print!("\r\n");
        print!("{}", border);
    }
    print!("\r\n");
}
