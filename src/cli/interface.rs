use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::core::{Board, Cell, Position};
use crate::game::{MatchObserver, MatchOutcome, Turn};

/// Render a board with row and column headers. With `shots_only` the ships
/// stay hidden and only hits, misses and water are shown.
pub fn render_board(board: &Board, shots_only: bool) -> String {
    let mut out = String::from("  ");
    for c in 0..board.cols() {
        let _ = write!(out, "{}", c);
    }
    out.push('\n');
    for r in 0..board.rows() {
        let _ = write!(out, "{} ", r);
        for c in 0..board.cols() {
            let ch = match board.cell(Position::new(r, c)) {
                Some(Cell::Hit(_)) => 'X',
                Some(Cell::Miss) => 'o',
                Some(Cell::Obstructed) => '#',
                Some(Cell::Ship(id)) if !shots_only => board.config().fleet()[id].symbol(),
                _ => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Print a board to stdout.
pub fn print_board(board: &Board, shots_only: bool) {
    print!("{}", render_board(board, shots_only));
}

/// Narrates a match on a writer, optionally waiting for Enter after each turn.
pub struct ConsoleObserver<W: Write> {
    out: W,
    pause: bool,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout(pause: bool) -> Self {
        Self::new(io::stdout(), pause)
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, pause: bool) -> Self {
        Self { out, pause }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn wait_for_enter(&mut self) {
        let _ = write!(self.out, "Press enter to continue: ");
        let _ = self.out.flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}

impl<W: Write> MatchObserver for ConsoleObserver<W> {
    fn turn_started(&mut self, attacker: &str, defender: &str, board: &Board, shots_only: bool) {
        let _ = writeln!(self.out, "{}'s turn. Board for {}:", attacker, defender);
        let _ = write!(self.out, "{}", render_board(board, shots_only));
    }

    fn attack_resolved(&mut self, turn: &Turn<'_>, board: &Board, shots_only: bool) {
        let Position { row, col } = turn.target;
        match (&turn.result, turn.attacker_is_human) {
            (Err(_), true) => {
                let _ = writeln!(self.out, "{} wasted a shot at ({},{}).", turn.attacker, row, col);
            }
            (result, _) => {
                let what = match result {
                    Ok(outcome) if outcome.destroyed() => {
                        format!("destroyed the {}", turn.ship_name.unwrap_or("ship"))
                    }
                    Ok(outcome) if outcome.hit() => String::from("hit something"),
                    _ => String::from("missed"),
                };
                let _ = writeln!(
                    self.out,
                    "{} attacked ({},{}) and {}, resulting in:",
                    turn.attacker, row, col, what
                );
                let _ = write!(self.out, "{}", render_board(board, shots_only));
            }
        }
        if self.pause {
            self.wait_for_enter();
        }
    }

    fn match_finished(&mut self, outcome: &MatchOutcome) {
        let _ = writeln!(self.out, "{} wins!", outcome.winner_name);
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Orientation};

    fn tug_board() -> Board {
        let mut config = GameConfig::new(2, 3).unwrap();
        config.add_ship(2, 'T', "tug").unwrap();
        let mut board = Board::new(&config);
        board.place(Position::new(0, 1), 0, Orientation::Horizontal).unwrap();
        board
    }

    #[test]
    fn render_reveals_ships_unless_shots_only() {
        let mut board = tug_board();
        board.attack(Position::new(0, 1)).unwrap();
        board.attack(Position::new(1, 0)).unwrap();
        assert_eq!(render_board(&board, false), "  012\n0 .XT\n1 o..\n");
        assert_eq!(render_board(&board, true), "  012\n0 .X.\n1 o..\n");
    }
}
