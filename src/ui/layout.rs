//! Layout components (navbar, footer, status bar)

use super::components::{render_nav_button, ButtonStyle, BUTTON_HEIGHT};
use crate::app::App;
use crate::content;
use crate::platform::{QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows used by the full three-column footer
pub const FOOTER_HEIGHT: u16 = 7;

/// Below this terminal height the footer collapses to a single line
pub const COMPACT_FOOTER_BELOW: u16 = 40;

/// Width of each navbar link button
const NAV_BUTTON_WIDTH: u16 = 15;

/// Areas of the page chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub navbar: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

/// Split the screen into navbar, page content, footer and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let footer_height = if area.height < COMPACT_FOOTER_BELOW {
        1
    } else {
        FOOTER_HEIGHT
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Navbar
            Constraint::Min(0),                // Page content
            Constraint::Length(footer_height), // Footer
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    PageLayout {
        navbar: chunks[0],
        content: chunks[1],
        footer: chunks[2],
        status_bar: chunks[3],
    }
}

/// Draw the navbar: brand on the left, page links on the right
pub fn draw_navbar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(NAV_BUTTON_WIDTH)));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let brand = Paragraph::new(Line::from(Span::styled(
        app.config.brand_name(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(brand, chunks[0]);

    for (idx, view) in View::ALL.iter().enumerate() {
        let style = if matches!(view, View::Quote) {
            ButtonStyle::Primary
        } else {
            ButtonStyle::Link
        };
        render_nav_button(
            frame,
            chunks[idx + 1],
            view.function_key(),
            view.label(),
            style,
            app.state.current_view == *view,
        );
    }
}

/// Copyright line, with the year taken from the local clock
fn copyright_line(brand: &str) -> String {
    let year = Local::now().year();
    format!("© {year} {brand}. All rights reserved.")
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Draw the footer with contact details, quick links and business hours
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(Color::Gray);
    let brand = app.config.brand_name();

    if area.height < FOOTER_HEIGHT {
        let line = Line::from(vec![
            Span::styled(copyright_line(brand), muted),
            Span::raw("  "),
            Span::styled(
                format!("{} | {}", app.config.contact_email(), app.config.contact_phone()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    let contact = vec![
        heading("Contact Us"),
        Line::from(Span::styled(
            format!("Email: {}", app.config.contact_email()),
            muted,
        )),
        Line::from(Span::styled(
            format!("Phone: {}", app.config.contact_phone()),
            muted,
        )),
    ];
    frame.render_widget(Paragraph::new(contact), columns[0]);

    let mut links = vec![heading("Quick Links")];
    for (view, label) in [
        (View::About, "About Us"),
        (View::Schedule, "Schedule Appointment"),
        (View::Quote, "Get Quote"),
    ] {
        links.push(Line::from(vec![
            Span::styled(format!("{} ", view.shortcut()), Style::default().fg(Color::Cyan)),
            Span::styled(label, muted),
        ]));
    }
    frame.render_widget(Paragraph::new(links), columns[1]);

    let mut hours = vec![heading("Business Hours")];
    hours.extend(
        content::BUSINESS_HOURS
            .iter()
            .map(|(days, time)| Line::from(Span::styled(format!("{days}: {time}"), muted))),
    );
    frame.render_widget(Paragraph::new(hours), columns[2]);

    let copyright = Paragraph::new(Line::from(Span::styled(copyright_line(brand), muted)))
        .alignment(Alignment::Center);
    frame.render_widget(copyright, rows[1]);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.route()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = format!(" {QUIT_SHORTCUT}:quit ");
    let hint_width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        y: area.y,
        width: hint_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Home => "Enter:get a quote  h/a/s/g:pages  Esc:back".to_string(),
        View::About => "j/k:scroll  d/u:page  h/a/s/g:pages  Esc:back".to_string(),
        View::Schedule => "Enter:get a quote  h/a/s/g:pages  Esc:back".to_string(),
        View::Quote => format!("Tab:next  ←/→:choose  {SUBMIT_SHORTCUT}:send  F1-F4:pages  Esc:leave"),
    }
}
