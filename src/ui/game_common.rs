//! Shared layout pieces: outer frame, status bar, info panel, game-over banner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::Simulation;

/// Screen regions of the game view.
pub struct GameLayout {
    /// Board, top left inside the outer border
    pub content: Rect,
    /// Score line and key hints under the board
    pub status_bar: Rect,
    /// Right-hand info panel with its own border
    pub info_panel: Rect,
}

const CONTENT_MIN_HEIGHT: u16 = 10;
const INFO_PANEL_WIDTH: u16 = 22;

const RUNNING_CONTROLS: [(&str, &str); 2] = [("[Space/Up/Enter]", "Flap"), ("[Esc]", "Quit")];
const OVER_CONTROLS: [(&str, &str); 2] = [("[Space]", "Restart"), ("[Esc]", "Quit")];

/// Border colour of the outer frame: cyan while flying, red once crashed.
pub fn border_color(sim: &Simulation) -> Color {
    if sim.is_over() {
        Color::Red
    } else {
        Color::Cyan
    }
}

/// Clear `area`, draw the outer " Flappy " frame and split its inside.
///
/// ```text
/// ┌─ Flappy ────────────────────────┬─ Info ──────┐
/// │   [board]                       │  [info]     │
/// │ [score / key hints]             │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(frame: &mut Frame, area: Rect, sim: &Simulation) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(sim)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(CONTENT_MIN_HEIGHT), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Score line, then the keys that do something in the current state.
pub fn render_status_bar(frame: &mut Frame, area: Rect, sim: &Simulation) {
    if area.height < 1 {
        return;
    }

    let (text, color, controls) = if sim.is_over() {
        (
            format!("Game Over: {}", sim.display_score()),
            Color::Red,
            &OVER_CONTROLS,
        )
    } else {
        (
            format!("Score: {}", sim.display_score()),
            Color::Green,
            &RUNNING_CONTROLS,
        )
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }

    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Render the info panel border and return the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Render a compact game-over banner along the bottom of `area`.
///
/// Only the banner rows are cleared so the final board stays visible above it.
pub fn render_game_over_banner(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let banner_height: u16 = 4;
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height - banner_height,
        width: area.width,
        height: banner_height,
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "[Space] Restart",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
