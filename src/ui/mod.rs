//! Terminal rendering. Pure projection of session state to a ratatui frame;
//! nothing in here mutates the session.

pub mod play_scene;

use crate::game::types::GameSession;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, session: &GameSession) {
    let area = frame.size();

    // Game over overlay takes priority and occludes the play field.
    if session.game_over {
        render_game_over_overlay(frame, area, session);
        return;
    }

    play_scene::render_play_scene(frame, area, session);
}

/// Render a 2-line status bar: status message + key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
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
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Full-screen game over overlay with the final score and a restart control.
fn render_game_over_overlay(frame: &mut Frame, area: Rect, session: &GameSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height: u16 = 5;
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your score: {}", session.score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[R]", Style::default().fg(Color::White)),
            Span::styled(" Play Again  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height.min(inner.height)),
    );
}
