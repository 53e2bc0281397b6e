//! Random search that switches to a cross-shaped hunt after a hit.

use alloc::vec::Vec;
use log::debug;
use rand::rngs::SmallRng;

use super::{mark_outcome, pick, search, Targeting, HUNT_REACH};
use crate::core::common::{BoardError, Direction, Position, ShotOutcome};
use crate::core::tracking::{Mark, TrackingGrid};

/// Mode of a [`CrossHuntTargeting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossState {
    Searching,
    /// Hunting around the most recent hit on a ship still afloat.
    Targeting { last_hit: Position },
}

#[derive(Debug, Clone)]
pub struct CrossHuntTargeting {
    tracking: TrackingGrid,
    state: CrossState,
}

impl CrossHuntTargeting {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            tracking: TrackingGrid::new(rows, cols),
            state: CrossState::Searching,
        }
    }

    pub fn state(&self) -> CrossState {
        self.state
    }

    pub fn tracking(&self) -> &TrackingGrid {
        &self.tracking
    }

    /// Unknown cells up to [`HUNT_REACH`] away from `last_hit` in all four
    /// directions.
    pub fn candidates(&self, last_hit: Position) -> Vec<Position> {
        self.tracking.scan(last_hit, &Direction::ALL, HUNT_REACH)
    }
}

impl Targeting for CrossHuntTargeting {
    fn next_attack(&mut self, rng: &mut SmallRng) -> Position {
        if let CrossState::Targeting { last_hit } = self.state {
            let candidates = self.candidates(last_hit);
            if let Some(target) = pick(rng, &candidates) {
                self.tracking.set(target, Mark::Pending);
                return target;
            }
            debug!("cross hunt around {} exhausted, searching", last_hit);
            self.state = CrossState::Searching;
        }
        search(&mut self.tracking, rng)
    }

    fn record_result(&mut self, target: Position, result: Result<ShotOutcome, BoardError>) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("shot at {} rejected ({}), searching", target, e);
                self.state = CrossState::Searching;
                return;
            }
        };
        mark_outcome(&mut self.tracking, target, outcome);
        if outcome.destroyed() {
            self.state = CrossState::Searching;
        } else if outcome.hit() {
            self.state = CrossState::Targeting { last_hit: target };
        }
    }
}
