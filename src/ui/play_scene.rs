//! Rendering of the running game: board, status bar and info panel.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::{ObstacleRole, Simulation};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole game screen.
pub fn render_play_scene(frame: &mut Frame, area: Rect, sim: &Simulation, seed: Option<u64>) {
    let layout = create_game_layout(frame, area, sim);

    render_board(frame, layout.content, sim);
    render_status_bar(frame, layout.status_bar, sim);
    render_info_panel(frame, layout.info_panel, sim, seed);

    if sim.is_over() {
        render_game_over_banner(
            frame,
            layout.content,
            "GAME OVER",
            &format!("Score: {}", sim.display_score()),
        );
    }
}

/// Draw the board by sampling each terminal cell's center in board pixels.
fn render_board(frame: &mut Frame, area: Rect, sim: &Simulation) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = BOARD_WIDTH / width as f64;
    let y_scale = BOARD_HEIGHT / height as f64;

    // The character is smaller than a cell on tiny terminals; always draw
    // at least the cell under its center.
    let bounds = sim.character.bounds();
    let center_col = ((bounds.x + bounds.width / 2.0) / x_scale) as usize;
    let center_row = ((bounds.y + bounds.height / 2.0) / y_scale) as usize;

    let bird_glyph = if sim.character.velocity < -5.0 {
        "▲"
    } else if sim.character.velocity > 8.0 {
        "▼"
    } else {
        "►"
    };
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let by = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let bx = (col as f64 + 0.5) * x_scale;

            if (row == center_row && col == center_col) || bounds.contains_point(bx, by) {
                spans.push(Span::styled(bird_glyph, bird_style));
                continue;
            }

            let hit = sim
                .obstacles
                .iter()
                .find(|o| o.bounds().contains_point(bx, by));
            match hit.map(|o| o.role) {
                Some(ObstacleRole::Upper) => {
                    spans.push(Span::styled("█", Style::default().fg(Color::Green)))
                }
                Some(ObstacleRole::Lower) => {
                    spans.push(Span::styled("█", Style::default().fg(Color::LightGreen)))
                }
                None => spans.push(Span::raw(" ")),
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, sim: &Simulation, seed: Option<u64>) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                sim.display_score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Ticks: ", label),
            Span::styled(sim.tick_count.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled((sim.obstacles.len() / 2).to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(format!("{:+.0}", sim.character.velocity), value),
        ]),
    ];

    if let Some(seed) = seed {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Seed: ", label),
            Span::styled(seed.to_string(), Style::default().fg(Color::Cyan)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(sim: &Simulation) -> String {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_play_scene(f, area, sim, Some(7));
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_score_and_character() {
        let sim = Simulation::new();
        let screen = render_to_string(&sim);
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("►"));
        assert!(screen.contains("Seed: 7"));
    }

    #[test]
    fn test_renders_obstacles() {
        let mut sim = Simulation::new();
        sim.spawn_obstacle_pair(-200.0);
        for o in &mut sim.obstacles {
            o.x = 200.0;
        }
        let screen = render_to_string(&sim);
        assert!(screen.contains("█"));
    }

    #[test]
    fn test_renders_game_over() {
        let mut sim = Simulation::new();
        sim.score = 3.0;
        sim.status = crate::game::GameStatus::Over;
        let screen = render_to_string(&sim);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Game Over: 3"));
    }
}
