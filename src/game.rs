//! Match loop: fleet placement followed by alternating turns until one fleet
//! is destroyed.

use alloc::string::String;
use core::fmt;
use log::info;
use rand::rngs::SmallRng;

use crate::core::{Board, BoardError, GameConfig, PlayerError, Position, ShotOutcome};
use crate::player::Player;

/// Which side of the table a player sits on. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    fn from_index(i: usize) -> Self {
        if i == 0 {
            Seat::First
        } else {
            Seat::Second
        }
    }
}

/// Shot statistics of one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotTally {
    pub shots: usize,
    pub hits: usize,
    pub wasted: usize,
    pub ships_destroyed: usize,
}

impl ShotTally {
    fn record(&mut self, result: &Result<ShotOutcome, BoardError>) {
        self.shots += 1;
        match result {
            Err(_) => self.wasted += 1,
            Ok(outcome) => {
                if outcome.hit() {
                    self.hits += 1;
                }
                if outcome.destroyed() {
                    self.ships_destroyed += 1;
                }
            }
        }
    }
}

/// One resolved attack, as reported to a [`MatchObserver`].
#[derive(Debug, Clone)]
pub struct Turn<'a> {
    /// Zero-based turn counter across both players.
    pub number: usize,
    pub attacker: &'a str,
    pub defender: &'a str,
    pub attacker_is_human: bool,
    pub target: Position,
    pub result: Result<ShotOutcome, BoardError>,
    /// Name of the ship that was hit, if any.
    pub ship_name: Option<&'a str>,
}

/// How a finished match went.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchOutcome {
    pub winner: Seat,
    pub winner_name: String,
    /// Total attacks made by both players.
    pub turns: usize,
    /// Indexed by seat: first, then second.
    pub tallies: [ShotTally; 2],
}

/// Receives progress callbacks from [`play_match`].
pub trait MatchObserver {
    fn turn_started(&mut self, _attacker: &str, _defender: &str, _board: &Board, _shots_only: bool) {}

    fn attack_resolved(&mut self, _turn: &Turn<'_>, _board: &Board, _shots_only: bool) {}

    fn match_finished(&mut self, _outcome: &MatchOutcome) {}
}

/// Observer that ignores everything.
pub struct NullObserver;

impl MatchObserver for NullObserver {}

/// Reasons a match cannot be played to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The configuration has no ships to sink.
    NoShips,
    /// A player failed to place its fleet.
    Placement { seat: Seat, source: PlayerError },
    /// A player could not produce an attack.
    Player { seat: Seat, source: PlayerError },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoShips => write!(f, "The fleet is empty"),
            GameError::Placement { seat, source } => {
                write!(f, "{:?} player could not place ships: {}", seat, source)
            }
            GameError::Player { seat, source } => {
                write!(f, "{:?} player could not attack: {}", seat, source)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Play one match between `first` and `second` on fresh boards built from
/// `config`. `first` places and attacks first. Every random choice of both
/// players is drawn from `rng`.
pub fn play_match(
    config: &GameConfig,
    first: &mut dyn Player,
    second: &mut dyn Player,
    rng: &mut SmallRng,
    observer: &mut dyn MatchObserver,
) -> Result<MatchOutcome, GameError> {
    if config.num_ships() == 0 {
        return Err(GameError::NoShips);
    }
    let mut players: [&mut dyn Player; 2] = [first, second];
    let mut boards = [Board::new(config), Board::new(config)];
    for (i, (player, board)) in players.iter_mut().zip(boards.iter_mut()).enumerate() {
        player
            .place_ships(rng, board)
            .map_err(|source| GameError::Placement {
                seat: Seat::from_index(i),
                source,
            })?;
    }
    info!(
        "{} vs {} on {}x{}",
        players[0].name(),
        players[1].name(),
        config.rows(),
        config.cols()
    );

    let mut tallies = [ShotTally::default(); 2];
    let mut number = 0;
    while !boards[0].all_destroyed() && !boards[1].all_destroyed() {
        let attacker = number % 2;
        let defender = 1 - attacker;
        let shots_only = players[attacker].is_human();
        observer.turn_started(
            players[attacker].name(),
            players[defender].name(),
            &boards[defender],
            shots_only,
        );

        let target = players[attacker]
            .recommend_attack(rng)
            .map_err(|source| GameError::Player {
                seat: Seat::from_index(attacker),
                source,
            })?;
        let result = boards[defender].attack(target);
        players[attacker].record_attack_result(target, result);
        players[defender].record_attack_by_opponent(target);
        tallies[attacker].record(&result);

        let turn = Turn {
            number,
            attacker: players[attacker].name(),
            defender: players[defender].name(),
            attacker_is_human: shots_only,
            target,
            result,
            ship_name: result
                .ok()
                .and_then(|o| o.ship_id())
                .and_then(|id| config.ship(id))
                .map(|s| s.name()),
        };
        observer.attack_resolved(&turn, &boards[defender], shots_only);
        number += 1;
    }

    let winner = if boards[1].all_destroyed() {
        Seat::First
    } else {
        Seat::Second
    };
    let outcome = MatchOutcome {
        winner,
        winner_name: players[winner.index()].name().into(),
        turns: number,
        tallies,
    };
    info!("{} wins after {} turns", outcome.winner_name, outcome.turns);
    observer.match_finished(&outcome);
    Ok(outcome)
}
