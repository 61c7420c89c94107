//! Headless simulator.
//!
//! Runs the real [`Session`](crate::game::Session) scheduler on a virtual
//! clock, flapping according to a [`FlapPolicy`]. A seed plus a policy fully
//! determines the run, so reports can be reproduced exactly.

mod config;
mod report;
mod runner;
mod script;

pub use config::{FlapPolicy, SimConfig};
pub use report::SimReport;
pub use runner::run_simulation;
pub use script::{load_script_from_path, parse_script, FlapScript, ScriptFrame};
