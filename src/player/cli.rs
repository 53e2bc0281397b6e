#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::cli::render_board;
use crate::core::{Board, BoardError, Orientation, PlayerError, Position, ShotOutcome};

use super::Player;

/// Console player: answers every prompt from `input` and writes prompts to
/// `output`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Human player reading stdin and prompting on stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

/// Parse "3 5" into (3, 5). Anything after the second number is ignored.
fn parse_two_integers(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let r = parts.next()?.parse().ok()?;
    let c = parts.next()?.parse().ok()?;
    Some((r, c))
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, PlayerError> {
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(PlayerError::InputClosed),
            Ok(_) => Ok(line.trim().into()),
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn read_direction(&mut self, ship: &str, length: usize) -> Result<Orientation, PlayerError> {
        loop {
            let text = format!("Enter h or v for direction of {} (length {}): ", ship, length);
            match self.prompt(&text)?.as_str() {
                "h" => return Ok(Orientation::Horizontal),
                "v" => return Ok(Orientation::Vertical),
                _ => self.say("Direction must be h or v."),
            }
        }
    }

    fn read_position(&mut self, text: &str) -> Result<Position, PlayerError> {
        loop {
            match parse_two_integers(&self.prompt(text)?) {
                Some((r, c)) => return Ok(Position::new(r, c)),
                None => self.say("You must enter two integers."),
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board) -> Result<(), PlayerError> {
        let fleet = board.config().fleet().to_vec();
        for (id, spec) in fleet.iter().enumerate() {
            let header = format!("{} must place {} ships.", self.name, fleet.len() - id);
            self.say(&header);
            let _ = write!(self.output, "{}", render_board(board, false));
            let orientation = self.read_direction(spec.name(), spec.length())?;
            let end = match orientation {
                Orientation::Vertical => "top",
                Orientation::Horizontal => "left",
            };
            let text = format!("Enter row and column of {}most cell (e.g., 3 5): ", end);
            loop {
                let origin = self.read_position(&text)?;
                match board.place(origin, id, orientation) {
                    Ok(()) => break,
                    Err(_) => self.say("The ship cannot be placed there."),
                }
            }
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Result<Position, PlayerError> {
        self.read_position("Enter row and column to attack (e.g., 3 5): ")
    }

    fn record_attack_result(&mut self, _target: Position, _result: Result<ShotOutcome, BoardError>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_integers_and_ignores_the_rest() {
        assert_eq!(parse_two_integers("3 5"), Some((3, 5)));
        assert_eq!(parse_two_integers("  0   9 extra"), Some((0, 9)));
        assert_eq!(parse_two_integers("3"), None);
        assert_eq!(parse_two_integers("-1 2"), None);
        assert_eq!(parse_two_integers("a b"), None);
    }
}
