//! Core battleship game engine (no_std compatible)
//!
//! This module contains the pure game logic: boards, the fleet catalog, fleet
//! placement and the AI targeting strategies. It only needs `alloc`, `rand`
//! and the `log` facade.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod placement;
pub mod ship;
pub mod tracking;

// Re-export commonly used types
pub use ai::{
    CrossHuntTargeting, CrossState, HuntState, LockingHuntTargeting, SweepTargeting, Targeting,
};
pub use board::{Board, Cell};
pub use common::{BoardError, ConfigError, Direction, PlayerError, Position, ShotOutcome};
pub use config::*;
pub use ship::{Orientation, PlacedShip, ShipId, ShipSpec};
pub use tracking::{Mark, TrackingGrid};
