//! Flappy - terminal side-scroller library.
//!
//! Exposes the simulation core, scheduler and simulator for testing and for
//! the binaries.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod simulator;
pub mod ui;

pub use constants::*;
pub use game::{Session, Simulation, Spawner};
