//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AwfulPlayer: rows of ships, sweeps the board in reverse order
//! - MediocrePlayer: backtracking placement, random search plus cross hunt
//! - GoodPlayer: random placement, random search plus orientation-locking hunt
//! - HumanPlayer: interactive console player (std only)

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use rand::rngs::SmallRng;

use crate::core::{Board, BoardError, GameConfig, PlayerError, Position, ShotOutcome};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing its fleet on its own board
/// - Recommending targets on the opponent board
/// - Learning from the result of each of its attacks
pub trait Player {
    fn name(&self) -> &str;

    /// Humans see only shot marks on the opponent board.
    fn is_human(&self) -> bool {
        false
    }

    /// Place the whole fleet onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlayerError>;

    /// Choose the next cell to attack.
    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Position, PlayerError>;

    /// Inform the player of the result of its last attack. `Err` means the
    /// shot was rejected and wasted.
    fn record_attack_result(&mut self, target: Position, result: Result<ShotOutcome, BoardError>);

    /// Inform the player of an opponent attack against its board.
    fn record_attack_by_opponent(&mut self, _target: Position) {}
}

/// Player types selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum PlayerKind {
    Human,
    Awful,
    Mediocre,
    Good,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::Human,
        PlayerKind::Awful,
        PlayerKind::Mediocre,
        PlayerKind::Good,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Awful => "awful",
            PlayerKind::Mediocre => "mediocre",
            PlayerKind::Good => "good",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown player type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlayerKind(pub String);

impl fmt::Display for UnknownPlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown player type '{}'", self.0)
    }
}

impl FromStr for PlayerKind {
    type Err = UnknownPlayerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownPlayerKind(s.into()))
    }
}

/// Build a player of `kind`. Without the `std` feature there is no console,
/// so asking for a human yields `None`.
pub fn create_player(
    kind: PlayerKind,
    name: impl Into<String>,
    config: &GameConfig,
) -> Option<Box<dyn Player>> {
    let name = name.into();
    match kind {
        PlayerKind::Awful => Some(Box::new(AwfulPlayer::new(name, config))),
        PlayerKind::Mediocre => Some(Box::new(MediocrePlayer::new(name, config))),
        PlayerKind::Good => Some(Box::new(GoodPlayer::new(name, config))),
        #[cfg(feature = "std")]
        PlayerKind::Human => Some(Box::new(HumanPlayer::stdio(name))),
        #[cfg(not(feature = "std"))]
        PlayerKind::Human => None,
    }
}

// Re-export implementations
pub mod ai;
pub use ai::{AwfulPlayer, GoodPlayer, MediocrePlayer};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::HumanPlayer;
