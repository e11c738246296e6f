#[cfg(test)]
mod tests {
    use crate::core::{Board, GameResult, Mark, Move};
    use crate::game::Game;
    use crate::player::ai::best_move;

    /// Builds a board from 'X'/'O'/'.' cells via a snapshot load.
    fn board_from(cells: [[char; 3]; 3]) -> Board {
        let mut grid = [[None; 3]; 3];
        for (row, row_cells) in cells.iter().enumerate() {
            for (col, &cell) in row_cells.iter().enumerate() {
                grid[row][col] = match cell {
                    'X' => Some(Mark::X),
                    'O' => Some(Mark::O),
                    _ => None,
                };
            }
        }
        let mut board = Board::new();
        board.load_from(&grid);
        board
    }

    #[test]
    fn apply_rejects_occupied_cell() {
        let mut board = Board::new();
        assert!(board.apply_move(Mark::X, Move::new(1, 1)));
        let before = board.snapshot();

        assert!(!board.apply_move(Mark::O, Move::new(1, 1)));
        assert_eq!(board.snapshot(), before);
        assert_eq!(board.moves(), 1);
    }

    #[test]
    fn apply_rejects_out_of_range() {
        let mut board = Board::new();
        assert!(!board.apply_move(Mark::X, Move::new(3, 0)));
        assert!(!board.apply_move(Mark::X, Move::new(0, 3)));
        assert_eq!(board.moves(), 0);
    }

    #[test]
    fn detects_every_winning_line() {
        let lines: [[(usize, usize); 3]; 8] = [
            [(0, 0), (0, 1), (0, 2)],
            [(1, 0), (1, 1), (1, 2)],
            [(2, 0), (2, 1), (2, 2)],
            [(0, 0), (1, 0), (2, 0)],
            [(0, 1), (1, 1), (2, 1)],
            [(0, 2), (1, 2), (2, 2)],
            [(0, 0), (1, 1), (2, 2)],
            [(0, 2), (1, 1), (2, 0)],
        ];

        for line in lines {
            let mut cells = [['.'; 3]; 3];
            for (row, col) in line {
                cells[row][col] = 'X';
            }
            // Two O fillers bring the count past the win threshold
            let mut fillers = 2;
            'fill: for row in 0..3 {
                for col in 0..3 {
                    if cells[row][col] == '.' {
                        cells[row][col] = 'O';
                        fillers -= 1;
                        if fillers == 0 {
                            break 'fill;
                        }
                    }
                }
            }

            let board = board_from(cells);
            assert!(board.has_win(Mark::X), "missed line {:?}", line);
            assert!(!board.has_win(Mark::O), "phantom win on {:?}", line);
        }
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board = board_from([
            ['X', 'O', 'X'],
            ['X', 'O', 'O'],
            ['O', 'X', 'X'],
        ]);
        assert!(board.is_draw());
        assert!(!board.has_win(Mark::X));
        assert!(!board.has_win(Mark::O));
    }

    #[test]
    fn ninth_move_win_beats_the_draw_count() {
        let mut game = Game::new();
        let sequence = [
            (0, 0),
            (0, 1),
            (2, 1),
            (1, 0),
            (0, 2),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 2),
        ];
        for (row, col) in sequence {
            assert_eq!(game.result, GameResult::InProgress);
            assert!(game.play_turn(Move::new(row, col)));
            // No reachable position is won for both sides
            assert!(!(game.board.has_win(Mark::X) && game.board.has_win(Mark::O)));
        }
        // The board filled up on a completed line: the win is reported
        assert_eq!(game.result, GameResult::Win(Mark::X));
    }

    #[test]
    fn finished_game_rejects_further_moves() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(game.play_turn(Move::new(row, col)));
        }
        assert_eq!(game.result, GameResult::Win(Mark::X));
        assert!(!game.play_turn(Move::new(2, 2)));
    }

    #[test]
    fn snapshot_load_round_trip() {
        let mut board = Board::new();
        board.apply_move(Mark::X, Move::new(0, 0));
        board.apply_move(Mark::O, Move::new(1, 1));
        board.apply_move(Mark::X, Move::new(2, 2));

        let snap = board.snapshot();
        let mut other = Board::new();
        other.load_from(&snap);

        assert_eq!(other.snapshot(), snap);
        assert_eq!(other.moves(), board.moves());
    }

    #[test]
    fn board_survives_json_round_trip() {
        let board = board_from([
            ['X', '.', 'O'],
            ['.', 'X', '.'],
            ['.', '.', 'O'],
        ]);
        let json = serde_json::to_string(&board).unwrap();
        let decoded: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, board);
    }

    #[test]
    fn keypad_digits_map_row_major() {
        assert_eq!(Move::from_key(1), Some(Move::new(0, 0)));
        assert_eq!(Move::from_key(5), Some(Move::new(1, 1)));
        assert_eq!(Move::from_key(9), Some(Move::new(2, 2)));
        assert_eq!(Move::from_key(0), None);
        assert_eq!(Move::from_key(10), None);
    }

    #[test]
    fn opening_move_is_deterministic() {
        assert_eq!(best_move(&Board::new(), Mark::X), Move::new(0, 0));
    }

    #[test]
    fn takes_the_immediate_win() {
        let board = board_from([
            ['X', '.', '.'],
            ['.', 'X', '.'],
            ['O', 'O', '.'],
        ]);
        assert_eq!(best_move(&board, Mark::O), Move::new(2, 2));
    }

    #[test]
    fn blocks_the_open_line() {
        let board = board_from([
            ['X', 'X', '.'],
            ['.', 'O', '.'],
            ['.', '.', '.'],
        ]);
        assert_eq!(best_move(&board, Mark::O), Move::new(0, 2));
    }

    #[test]
    fn prefers_the_faster_win() {
        // (0,2) also wins eventually, but scans earlier and takes two
        // more plies; the one-move win at (1,2) must outrank it.
        let board = board_from([
            ['X', 'X', '.'],
            ['O', 'O', '.'],
            ['.', '.', 'X'],
        ]);
        assert_eq!(best_move(&board, Mark::O), Move::new(1, 2));
    }

    #[test]
    fn search_only_returns_empty_cells() {
        let boards = [
            board_from([
                ['X', '.', '.'],
                ['.', 'X', '.'],
                ['O', 'O', '.'],
            ]),
            board_from([
                ['X', 'O', 'X'],
                ['.', 'O', '.'],
                ['.', 'X', '.'],
            ]),
        ];
        for board in &boards {
            for mark in [Mark::X, Mark::O] {
                let mv = best_move(board, mark);
                assert_eq!(board.get(mv.row, mv.col), None);
            }
        }
    }

    #[test]
    fn optimal_play_on_both_sides_draws() {
        let mut game = Game::new();
        while game.result == GameResult::InProgress {
            let mv = best_move(&game.board, game.current);
            assert!(game.play_turn(mv));
        }
        assert_eq!(game.result, GameResult::Draw);
    }
}
