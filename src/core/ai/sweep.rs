use rand::rngs::SmallRng;

use super::Targeting;
use crate::core::common::{BoardError, Position, ShotOutcome};

/// Fires at every cell in reverse raster order, starting from the last cell,
/// and ignores every result.
#[derive(Debug, Clone)]
pub struct SweepTargeting {
    rows: usize,
    cols: usize,
    last: Position,
}

impl SweepTargeting {
    /// A board without cells pins the sweep at (0,0).
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            last: Position::new(0, 0),
        }
    }
}

impl Targeting for SweepTargeting {
    fn next_attack(&mut self, _rng: &mut SmallRng) -> Position {
        if self.last.col > 0 {
            self.last.col -= 1;
        } else {
            self.last.col = self.cols.saturating_sub(1);
            if self.last.row > 0 {
                self.last.row -= 1;
            } else {
                self.last.row = self.rows.saturating_sub(1);
            }
        }
        self.last
    }

    fn record_result(&mut self, _target: Position, _result: Result<ShotOutcome, BoardError>) {}
}
