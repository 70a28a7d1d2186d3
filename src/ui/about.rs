//! About page: company overview, values and team

use crate::app::App;
use crate::content;
use crate::ui::components::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn section_title(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// Lines of the page, top to bottom
fn build_lines() -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::Gray);
    let mut lines = vec![section_title("About Us"), Line::from("")];

    for paragraph in content::ABOUT_OVERVIEW {
        lines.push(Line::from(Span::styled(*paragraph, muted)));
        lines.push(Line::from(""));
    }

    lines.push(section_title("Our Values"));
    lines.push(Line::from(""));
    for (value, description) in content::VALUES {
        lines.push(Line::from(Span::styled(
            *value,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(*description, muted)));
        lines.push(Line::from(""));
    }

    lines.push(section_title("Our Team"));
    lines.push(Line::from(""));
    for (name, role) in content::TEAM {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{name:<16}"),
                Style::default().fg(Color::White),
            ),
            Span::styled(*role, muted),
        ]));
    }

    lines
}

/// Furthest the page can scroll before the last line leaves the bottom
/// border. `area` includes the border.
pub fn max_scroll(area: Rect) -> usize {
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let total: usize = build_lines()
        .iter()
        .map(|line| wrap_text(&line.to_string(), inner_width).len())
        .sum();
    total.saturating_sub(inner_height)
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let offset = app.state.scroll_offset.min(max_scroll(area));
    let scroll = u16::try_from(offset).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(build_lines())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" About "),
        );
    frame.render_widget(paragraph, area);
}
