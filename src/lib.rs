#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod player_scripted;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use input::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use player_scripted::*;
