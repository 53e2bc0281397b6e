use alloc::string::String;
use rand::rngs::SmallRng;

use crate::core::{
    ai::{CrossHuntTargeting, LockingHuntTargeting, SweepTargeting, Targeting},
    placement, Board, BoardError, GameConfig, PlayerError, Position, ShotOutcome,
};

use super::Player;

/// Lines its ships up in the top-left corner and sweeps the opponent board
/// from the bottom-right, ignoring every result.
pub struct AwfulPlayer {
    name: String,
    targeting: SweepTargeting,
}

impl AwfulPlayer {
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            targeting: SweepTargeting::new(config.rows(), config.cols()),
        }
    }
}

impl Player for AwfulPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board) -> Result<(), PlayerError> {
        Ok(placement::place_in_rows(board)?)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Position, PlayerError> {
        Ok(self.targeting.next_attack(rng))
    }

    fn record_attack_result(&mut self, target: Position, result: Result<ShotOutcome, BoardError>) {
        self.targeting.record_result(target, result);
    }
}

/// Places its fleet with a blocked backtracking search and hunts around
/// hits in a cross pattern.
pub struct MediocrePlayer {
    name: String,
    targeting: CrossHuntTargeting,
}

impl MediocrePlayer {
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            targeting: CrossHuntTargeting::new(config.rows(), config.cols()),
        }
    }

    pub fn targeting(&self) -> &CrossHuntTargeting {
        &self.targeting
    }
}

impl Player for MediocrePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlayerError> {
        Ok(placement::place_with_backtracking(board, rng)?)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Position, PlayerError> {
        Ok(self.targeting.next_attack(rng))
    }

    fn record_attack_result(&mut self, target: Position, result: Result<ShotOutcome, BoardError>) {
        self.targeting.record_result(target, result);
    }
}

/// Scatters its fleet over random origins, probes the neighbours of a first
/// hit and then follows the axis the second hit reveals.
pub struct GoodPlayer {
    name: String,
    targeting: LockingHuntTargeting,
}

impl GoodPlayer {
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            targeting: LockingHuntTargeting::new(config.rows(), config.cols()),
        }
    }

    pub fn targeting(&self) -> &LockingHuntTargeting {
        &self.targeting
    }
}

impl Player for GoodPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlayerError> {
        Ok(placement::place_from_random_origins(board, rng)?)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Position, PlayerError> {
        Ok(self.targeting.next_attack(rng))
    }

    fn record_attack_result(&mut self, target: Position, result: Result<ShotOutcome, BoardError>) {
        self.targeting.record_result(target, result);
    }
}
