#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod discovery;
pub mod edge;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player_cli;
mod setup;
mod shape;
pub mod sim;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use discovery::{discover, DiscoveredPiece, Discovery};
pub use edge::{anchor_offset, label_at, valid_edge_labels, AnchorOffset, EdgeLabel};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use setup::*;
pub use shape::*;
pub use sim::{autoplay, HiddenLayout};
