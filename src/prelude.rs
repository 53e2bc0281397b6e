//! Commonly used types and utilities for ease of import.

pub use crate::{
    create_player, play_match, Board, GameConfig, MatchObserver, MatchOutcome, NullObserver,
    Orientation, Player, PlayerKind, Position, ShotOutcome, Targeting,
};

#[cfg(feature = "std")]
pub use crate::cli::{print_board, render_board, ConsoleObserver};
#[cfg(feature = "std")]
pub use crate::HumanPlayer;
