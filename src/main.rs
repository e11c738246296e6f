use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use std::io;
use std::time::Duration;
use tictactoe_ai::core::Mark;
use tictactoe_ai::game::Game;
use tictactoe_ai::player::{MinimaxAI, PlayerController, TuiController};

fn main() -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    print!("=== Tic-Tac-Toe ===\r\n");

    print!("\r\nSelect mode:\r\n");
    print!("1. Human vs Human\r\n");
    print!("2. Human vs Computer\r\n");
    print!("3. Computer vs Computer\r\n");

    let choice = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break "1",
                    KeyCode::Char('2') => break "2",
                    KeyCode::Char('3') => break "3",
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    let (x, o): (Box<dyn PlayerController>, Box<dyn PlayerController>) = match choice {
        "1" => (
            Box::new(TuiController::new(Mark::X, "Player 1")),
            Box::new(TuiController::new(Mark::O, "Player 2")),
        ),
        "2" => {
            if ask_play_first()? {
                (
                    Box::new(TuiController::new(Mark::X, "Human")),
                    Box::new(MinimaxAI::new(Mark::O, "Computer AI")),
                )
            } else {
                (
                    Box::new(MinimaxAI::new(Mark::X, "Computer AI")),
                    Box::new(TuiController::new(Mark::O, "Human")),
                )
            }
        }
        _ => (
            Box::new(MinimaxAI::new(Mark::X, "AI X")),
            Box::new(MinimaxAI::new(Mark::O, "AI O")),
        ),
    };

    let mut game = Game::new();
    game.play(x.as_ref(), o.as_ref());

    Ok(())
}

fn ask_play_first() -> anyhow::Result<bool> {
    use std::io::Write;

    print!("\r\nPlay first as X? (y: Yes, n: No): ");
    io::stdout().flush()?;

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => {
                        print!("Yes\r\n");
                        return Ok(true);
                    }
                    KeyCode::Char('n') => {
                        print!("No\r\n");
                        return Ok(false);
                    }
                    KeyCode::Char('q') => return Err(anyhow::anyhow!("Canceled")),
                    _ => {}
                }
            }
        }
    }
}
