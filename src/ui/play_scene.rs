//! Rendering for the active play field.

use crate::constants::{BIRD_X, FIELD_HEIGHT, FIELD_WIDTH, PIPE_WIDTH};
use crate::game::types::GameSession;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the play field with bird, pipes, and score status bar.
pub fn render_play_scene(frame: &mut Frame, area: Rect, session: &GameSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play area (top) + status bar (bottom 2 lines)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], session);
    render_status_bar_content(frame, chunks[1], session);
}

/// Project the 500x500 logical field onto the available cells.
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let x_scale = width as f64 / FIELD_WIDTH;
    let y_scale = height as f64 / FIELD_HEIGHT;

    let bird_col = ((BIRD_X * x_scale).round() as usize).min(width - 1);
    let bird_row = ((session.bird_y.max(0.0) * y_scale).round() as usize).min(height - 1);

    let bird_char = if session.bird_velocity < -0.5 {
        "▲" // Flapping up
    } else if session.bird_velocity > 1.0 {
        "▼" // Falling fast
    } else {
        "►" // Neutral
    };

    let mut lines = Vec::with_capacity(height);

    for row in 0..height {
        let game_y = row as f64 / y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            if row == bird_row && col == bird_col {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let game_x = col as f64 / x_scale;
            let in_pipe = session.pipes.iter().any(|pipe| {
                game_x >= pipe.x
                    && game_x < pipe.x + PIPE_WIDTH
                    && (game_y < pipe.gap_top || game_y > pipe.gap_bottom())
            });

            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    crate::ui::render_status_bar(
        frame,
        area,
        &format!("Score: {}", session.score),
        Color::Green,
        &[("[Space]", "Flap"), ("[Q]", "Quit")],
    );
}
