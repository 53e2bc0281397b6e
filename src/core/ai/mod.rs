//! Targeting strategies used by the scripted players.
//!
//! Every strategy owns a [`TrackingGrid`] of the opponent board, proposes the
//! next shot with [`Targeting::next_attack`] and learns from the board's answer
//! through [`Targeting::record_result`]. All randomness comes from the caller's
//! generator so a fixed seed replays a game exactly.

use rand::rngs::SmallRng;
use rand::Rng;

use super::common::{BoardError, Position, ShotOutcome};
use super::tracking::{Mark, TrackingGrid};

pub mod cross;
pub mod locking;
pub mod sweep;

pub use cross::{CrossHuntTargeting, CrossState};
pub use locking::{HuntState, LockingHuntTargeting};
pub use sweep::SweepTargeting;

/// How far the hunting strategies look along an axis from their last hit.
pub const HUNT_REACH: usize = 4;

/// Shot selection for an AI player.
pub trait Targeting {
    /// Choose the next cell to fire at.
    fn next_attack(&mut self, rng: &mut SmallRng) -> Position;

    /// Learn from the outcome of a shot at `target`. `Err` means the board
    /// rejected the shot.
    fn record_result(&mut self, target: Position, result: Result<ShotOutcome, BoardError>);
}

/// Uniform choice from `candidates`.
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, candidates: &[Position]) -> Option<Position> {
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}

/// Exploratory shot: a random unknown cell, marked pending. Once nothing is
/// unknown any cell is returned and the board's rejection resets the hunter.
pub(crate) fn search<R: Rng + ?Sized>(tracking: &mut TrackingGrid, rng: &mut R) -> Position {
    match tracking.random_unknown(rng) {
        Some(p) => {
            tracking.set(p, Mark::Pending);
            p
        }
        None => Position::new(
            rng.random_range(0..tracking.rows()),
            rng.random_range(0..tracking.cols()),
        ),
    }
}

/// Record a confirmed outcome on the tracking grid.
pub(crate) fn mark_outcome(tracking: &mut TrackingGrid, target: Position, outcome: ShotOutcome) {
    let mark = if outcome.hit() { Mark::Hit } else { Mark::Miss };
    tracking.set(target, mark);
}
