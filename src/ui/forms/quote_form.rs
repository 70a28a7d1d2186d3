//! Quote request page

use super::field_renderer::{draw_compact_field, draw_field};
use crate::app::App;
use crate::content;
use crate::platform::{CLEAR_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{QuoteField, QuoteForm};
use crate::ui::components::{render_button, render_compact_button, ButtonStyle, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field rows as laid out on the page; pairs share a row
const ROWS: &[&[QuoteField]] = &[
    &[QuoteField::Name, QuoteField::Email],
    &[QuoteField::Phone, QuoteField::Company],
    &[QuoteField::ProjectType],
    &[QuoteField::Budget, QuoteField::Timeline],
    &[QuoteField::Description],
];

fn help_line(form: &QuoteForm) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![Span::styled("Tab", key), Span::raw(": next field  ")];
    match form.active() {
        Some(field) if field.is_select() => {
            spans.push(Span::styled("←/→", key));
            spans.push(Span::raw(": choose  "));
        }
        Some(field) if field.is_multiline() => {
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(": new line  "));
        }
        Some(_) => {
            spans.push(Span::styled(CLEAR_SHORTCUT, key));
            spans.push(Span::raw(": clear  "));
        }
        None => {
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(": send  "));
        }
    }
    spans.push(Span::styled(SUBMIT_SHORTCUT, key));
    spans.push(Span::raw(": send  "));
    spans.push(Span::styled("Esc", key));
    spans.push(Span::raw(": leave"));
    Line::from(spans)
}

/// Inner height the bordered layout needs: intro, four rows of boxes, the
/// description box, the button and the help line
const FULL_LAYOUT_HEIGHT: u16 = 1 + 4 * 3 + 4 + BUTTON_HEIGHT + 1;

/// Draw the quote form
pub fn draw_quote_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.quote_form.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(" Get a Quote ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < FULL_LAYOUT_HEIGHT {
        draw_compact(frame, inner, form);
    } else {
        draw_full(frame, inner, form);
    }
}

fn intro() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        content::QUOTE_INTRO,
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )))
}

/// Bordered boxes, paired fields side by side
fn draw_full(frame: &mut Frame, inner: Rect, form: &QuoteForm) {
    let mut constraints = vec![Constraint::Length(1)]; // Intro
    constraints.extend(ROWS.iter().map(|row| {
        if row.iter().any(|f| f.is_multiline()) {
            Constraint::Min(4)
        } else {
            Constraint::Length(3)
        }
    }));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Request Quote
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(intro(), chunks[0]);

    let active = form.active();
    for (row_idx, row) in ROWS.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
            .split(chunks[row_idx + 1]);
        for (cell, field) in cells.iter().zip(row.iter()) {
            draw_field(
                frame,
                *cell,
                *field,
                form.values.get(*field),
                active == Some(*field),
            );
        }
    }

    render_button(
        frame,
        chunks[ROWS.len() + 1],
        "Request Quote",
        ButtonStyle::Primary,
        form.is_buttons_row_active(),
    );

    let help = Paragraph::new(help_line(form)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[ROWS.len() + 2]);
}

/// One row per field for short terminals; the description takes what is left
fn draw_compact(frame: &mut Frame, inner: Rect, form: &QuoteForm) {
    let mut constraints = vec![Constraint::Length(1)]; // Intro
    constraints.extend(QuoteField::ALL.iter().map(|f| {
        if f.is_multiline() {
            Constraint::Min(1)
        } else {
            Constraint::Length(1)
        }
    }));
    constraints.push(Constraint::Length(1)); // Request Quote
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(intro(), chunks[0]);

    let active = form.active();
    for (idx, field) in QuoteField::ALL.iter().enumerate() {
        draw_compact_field(
            frame,
            chunks[idx + 1],
            *field,
            form.values.get(*field),
            active == Some(*field),
        );
    }

    let fields = QuoteField::ALL.len();
    render_compact_button(
        frame,
        chunks[fields + 1],
        "Request Quote",
        form.is_buttons_row_active(),
    );

    let help = Paragraph::new(help_line(form)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[fields + 2]);
}
