//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Plain outlined link
    Link,
    /// Filled call-to-action (Get Quote, Request Quote)
    Primary,
}

/// Render a button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    style: ButtonStyle,
    is_selected: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = match (style, is_selected) {
        (ButtonStyle::Primary, true) => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        (ButtonStyle::Primary, false) => Style::default().fg(Color::White).bg(Color::Blue),
        (ButtonStyle::Link, true) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (ButtonStyle::Link, false) => Style::default().fg(Color::Gray),
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a single-row button for layouts without room for borders
pub fn render_compact_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool) {
    let style = if is_selected {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };
    let paragraph = Paragraph::new(format!("[ {content} ]"))
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(paragraph, area);
}

/// Render a navbar link with its function key
pub fn render_nav_button(
    frame: &mut Frame,
    area: Rect,
    key: u8,
    label: &str,
    style: ButtonStyle,
    is_selected: bool,
) {
    let content = format!("F{key} {label}");
    render_button(frame, area, &content, style, is_selected);
}
