//! Random search, then a probe of the four neighbours of a hit, then a hunt
//! restricted to the axis the second hit revealed.

use alloc::vec::Vec;
use log::debug;
use rand::rngs::SmallRng;

use super::{mark_outcome, pick, search, Targeting, HUNT_REACH};
use crate::core::common::{BoardError, Direction, Position, ShotOutcome};
use crate::core::ship::Orientation;
use crate::core::tracking::{Mark, TrackingGrid};

/// Mode of a [`LockingHuntTargeting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntState {
    Searching,
    /// First hit on a new ship; probing its direct neighbours. `probe` is the
    /// axis of the neighbour fired at most recently.
    AdjacentProbe {
        last_hit: Position,
        probe: Option<Orientation>,
    },
    /// Two hits in line; only cells on that line are fired at.
    Locked {
        last_hit: Position,
        orientation: Orientation,
    },
}

impl HuntState {
    pub fn last_hit(&self) -> Option<Position> {
        match *self {
            HuntState::Searching => None,
            HuntState::AdjacentProbe { last_hit, .. } | HuntState::Locked { last_hit, .. } => {
                Some(last_hit)
            }
        }
    }
}

fn axis(orientation: Orientation) -> [Direction; 2] {
    match orientation {
        Orientation::Horizontal => [Direction::Left, Direction::Right],
        Orientation::Vertical => [Direction::Up, Direction::Down],
    }
}

#[derive(Debug, Clone)]
pub struct LockingHuntTargeting {
    tracking: TrackingGrid,
    state: HuntState,
}

impl LockingHuntTargeting {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            tracking: TrackingGrid::new(rows, cols),
            state: HuntState::Searching,
        }
    }

    pub fn state(&self) -> HuntState {
        self.state
    }

    pub fn tracking(&self) -> &TrackingGrid {
        &self.tracking
    }

    /// Cells the current state would choose from; empty while searching.
    pub fn candidates(&self) -> Vec<Position> {
        match self.state {
            HuntState::Searching => Vec::new(),
            HuntState::AdjacentProbe { last_hit, .. } => {
                self.tracking.scan(last_hit, &Direction::ALL, 1)
            }
            HuntState::Locked {
                last_hit,
                orientation,
            } => self.tracking.scan(last_hit, &axis(orientation), HUNT_REACH),
        }
    }
}

impl Targeting for LockingHuntTargeting {
    fn next_attack(&mut self, rng: &mut SmallRng) -> Position {
        if self.state != HuntState::Searching {
            let candidates = self.candidates();
            match pick(rng, &candidates) {
                Some(target) => {
                    if let HuntState::AdjacentProbe { last_hit, probe } = &mut self.state {
                        *probe = Orientation::between(*last_hit, target);
                    }
                    self.tracking.set(target, Mark::Pending);
                    return target;
                }
                None => {
                    debug!("no candidates left in {:?}, searching", self.state);
                    self.state = HuntState::Searching;
                }
            }
        }
        search(&mut self.tracking, rng)
    }

    fn record_result(&mut self, target: Position, result: Result<ShotOutcome, BoardError>) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("shot at {} rejected ({}), searching", target, e);
                self.state = HuntState::Searching;
                return;
            }
        };
        mark_outcome(&mut self.tracking, target, outcome);
        if outcome.destroyed() {
            self.state = HuntState::Searching;
            return;
        }
        if !outcome.hit() {
            return;
        }
        self.state = match self.state {
            HuntState::Searching => HuntState::AdjacentProbe {
                last_hit: target,
                probe: None,
            },
            HuntState::AdjacentProbe { last_hit, probe } => {
                match probe.or_else(|| Orientation::between(last_hit, target)) {
                    // the lock stays centred on the first hit of this ship
                    Some(orientation) => {
                        debug!("locking {:?} around {}", orientation, last_hit);
                        HuntState::Locked {
                            last_hit,
                            orientation,
                        }
                    }
                    None => HuntState::AdjacentProbe {
                        last_hit: target,
                        probe: None,
                    },
                }
            }
            HuntState::Locked { orientation, .. } => HuntState::Locked {
                last_hit: target,
                orientation,
            },
        };
    }
}
