//! Schedule page
//!
//! The route is linked from the navbar and footer but online booking is not
//! offered, so the page points visitors at the other ways to reach us.

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(Span::styled(
            "Schedule an Appointment",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Online booking is not available yet. To set up a meeting, get in touch:",
            muted,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Email  ", Style::default().fg(Color::Cyan)),
            Span::raw(app.config.contact_email()),
        ]),
        Line::from(vec![
            Span::styled("  Phone  ", Style::default().fg(Color::Cyan)),
            Span::raw(app.config.contact_phone()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Already know what you need? Press Enter to request a quote.",
            muted,
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Schedule "),
        );
    frame.render_widget(paragraph, area);
}
