//! Two-player Battleship game core: the board and fleet data model, ship
//! placement validation, attack resolution, turn and phase control, and a
//! simple hunting bot.
//!
//! There is no rendering here. A UI layer drives the
//! [`GameController`] command surface (mode selection, placement
//! gestures, shots, turn hand-off), reads its query surface, and drains
//! the prompt queue for user-facing feedback.

mod board;
mod bot;
mod cell;
mod common;
mod config;
mod controller;
mod logging;
mod player;
mod render;
mod ship;

pub use board::*;
pub use bot::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use logging::init_logging;
pub use player::*;
pub use render::*;
pub use ship::*;
