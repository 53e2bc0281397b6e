#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod game;
pub mod player;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use crate::core::*;
pub use game::*;
pub use player::{
    create_player, AwfulPlayer, GoodPlayer, MediocrePlayer, Player, PlayerKind, UnknownPlayerKind,
};
#[cfg(feature = "std")]
pub use player::HumanPlayer;
#[cfg(feature = "std")]
pub use logging::init_logging;
