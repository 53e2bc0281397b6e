//! An attacker's private belief about the opponent board.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use super::common::{Direction, Position};

/// What a strategy knows about one opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Unknown,
    /// Chosen as a target, result not recorded yet.
    Pending,
    Miss,
    Hit,
}

/// Per-cell marks over the opponent board, owned by one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingGrid {
    rows: usize,
    cols: usize,
    marks: Vec<Mark>,
}

impl TrackingGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            marks: vec![Mark::Unknown; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Mark at `pos`, `None` when off the board.
    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.index(pos).map(|i| self.marks[i])
    }

    /// Overwrite the mark at `pos`; off-board positions are ignored.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        if let Some(i) = self.index(pos) {
            self.marks[i] = mark;
        }
    }

    pub fn is_unknown(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Unknown)
    }

    pub fn unknown_count(&self) -> usize {
        self.marks.iter().filter(|m| **m == Mark::Unknown).count()
    }

    /// Uniformly random unknown cell, `None` once every cell is known.
    pub fn random_unknown<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        let count = self.unknown_count();
        if count == 0 {
            return None;
        }
        let nth = rng.random_range(0..count);
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::Unknown)
            .nth(nth)
            .map(|(i, _)| Position::new(i / self.cols, i % self.cols))
    }

    /// Unknown cells at distance `1..=reach` from `origin` along each of
    /// `dirs`. Known or off-board cells are skipped one by one; the scan of a
    /// direction does not stop at them.
    pub fn scan(&self, origin: Position, dirs: &[Direction], reach: usize) -> Vec<Position> {
        let mut found = Vec::new();
        for distance in 1..=reach {
            for &dir in dirs {
                if let Some(p) = origin.offset(dir, distance, self.rows, self.cols) {
                    if self.is_unknown(p) {
                        found.push(p);
                    }
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_skips_known_cells_but_keeps_going() {
        let mut grid = TrackingGrid::new(1, 6);
        grid.set(Position::new(0, 1), Mark::Miss);
        let found = grid.scan(Position::new(0, 0), &[Direction::Right], 4);
        assert_eq!(
            found,
            vec![Position::new(0, 2), Position::new(0, 3), Position::new(0, 4)]
        );
    }

    #[test]
    fn scan_clips_at_the_edge() {
        let grid = TrackingGrid::new(3, 3);
        let found = grid.scan(Position::new(0, 0), &Direction::ALL, 4);
        assert_eq!(
            found,
            vec![
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(2, 0),
                Position::new(0, 2)
            ]
        );
    }

    #[test]
    fn set_ignores_off_board() {
        let mut grid = TrackingGrid::new(2, 2);
        grid.set(Position::new(5, 5), Mark::Hit);
        assert_eq!(grid.unknown_count(), 4);
        assert_eq!(grid.get(Position::new(5, 5)), None);
    }
}
