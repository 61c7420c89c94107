//! Terminal rendering. Reads game state, never changes it.

pub mod game_common;
pub mod play_scene;

use crate::game::Simulation;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw_ui(frame: &mut Frame, sim: &Simulation, seed: Option<u64>) {
    let area = frame.size();
    play_scene::render_play_scene(frame, area, sim, seed);
}
