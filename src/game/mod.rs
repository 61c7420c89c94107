//! Flappy simulation core.
//!
//! A single character falls under gravity and flaps upward on input while
//! pairs of obstacles scroll in from the right. Touching an obstacle or
//! falling below the board ends the run until it is restarted.

pub mod logic;
pub mod session;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use session::*;
pub use spawner::*;
pub use types::*;
