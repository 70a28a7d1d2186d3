//! Field rendering utilities for forms

use crate::content;
use crate::state::QuoteField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Label column of the compact layout, one wider than the longest label
const COMPACT_LABEL_WIDTH: usize = 22;

/// Title of the field box; required fields carry an asterisk
fn field_title(field: QuoteField) -> String {
    if field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    }
}

/// Placeholder shown for an empty, unfocused field
fn placeholder(field: QuoteField) -> String {
    match field {
        QuoteField::Description => content::DESCRIPTION_PLACEHOLDER.to_string(),
        f if f.is_select() => f.display_value(""),
        f if f.is_required() => "(required)".to_string(),
        _ => "(optional)".to_string(),
    }
}

/// Lines shown inside the field box
fn field_lines(field: QuoteField, value: &str, is_active: bool) -> Vec<Line<'static>> {
    let active = Style::default().fg(Color::Cyan);
    let normal = Style::default().fg(Color::White);
    let hint = Style::default().fg(Color::DarkGray);

    if field.is_select() {
        let label = field.display_value(value);
        let style = if value.is_empty() { hint } else { normal };
        return if is_active {
            vec![Line::from(vec![
                Span::styled("◂ ", active),
                Span::styled(label, style),
                Span::styled(" ▸", active),
            ])]
        } else {
            vec![Line::from(Span::styled(label, style))]
        };
    }

    if value.is_empty() && !is_active {
        return vec![Line::from(Span::styled(placeholder(field), hint))];
    }

    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), normal)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(CURSOR, active));
        }
    }
    lines
}

/// Draw a controlled field: the displayed value always comes from the record
pub fn draw_field(frame: &mut Frame, area: Rect, field: QuoteField, value: &str, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(field_lines(field, value, is_active))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Label column text for the compact layout
fn compact_label(field: QuoteField) -> String {
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    format!("{label:<COMPACT_LABEL_WIDTH$}")
}

/// Lines of a borderless field: label column, then the same value lines as
/// the boxed field, with continuation lines indented under the first
fn compact_field_lines(field: QuoteField, value: &str, is_active: bool) -> Vec<Line<'static>> {
    let label_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines = field_lines(field, value, is_active);
    for (idx, line) in lines.iter_mut().enumerate() {
        let prefix = if idx == 0 {
            Span::styled(compact_label(field), label_style)
        } else {
            Span::raw(" ".repeat(COMPACT_LABEL_WIDTH))
        };
        line.spans.insert(0, prefix);
    }
    lines
}

/// Draw a field as label and value rows without a border. Multiline values
/// keep their last lines in view.
pub fn draw_compact_field(
    frame: &mut Frame,
    area: Rect,
    field: QuoteField,
    value: &str,
    is_active: bool,
) {
    let lines = compact_field_lines(field, value, is_active);
    let overflow = lines.len().saturating_sub(area.height as usize);
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_required_title_has_asterisk() {
        assert_eq!(field_title(QuoteField::Name), " Name * ");
        assert_eq!(field_title(QuoteField::Company), " Company ");
    }

    #[test]
    fn test_empty_inactive_shows_placeholder() {
        assert_eq!(
            text(&field_lines(QuoteField::Phone, "", false)),
            vec!["(optional)"]
        );
        assert_eq!(
            text(&field_lines(QuoteField::Email, "", false)),
            vec!["(required)"]
        );
        assert_eq!(
            text(&field_lines(QuoteField::Description, "", false)),
            vec![content::DESCRIPTION_PLACEHOLDER]
        );
    }

    #[test]
    fn test_empty_active_shows_only_cursor() {
        assert_eq!(text(&field_lines(QuoteField::Name, "", true)), vec![CURSOR]);
    }

    #[test]
    fn test_active_text_ends_with_cursor() {
        assert_eq!(
            text(&field_lines(QuoteField::Name, "Ada", true)),
            vec![format!("Ada{CURSOR}")]
        );
    }

    #[test]
    fn test_multiline_value_splits_lines() {
        assert_eq!(
            text(&field_lines(QuoteField::Description, "one\ntwo", false)),
            vec!["one", "two"]
        );
    }

    #[test]
    fn test_select_shows_label_and_arrows_when_active() {
        assert_eq!(
            text(&field_lines(QuoteField::Timeline, "urgent", false)),
            vec!["Urgent (1-2 weeks)"]
        );
        assert_eq!(
            text(&field_lines(QuoteField::Timeline, "", true)),
            vec!["◂ Select timeline ▸"]
        );
    }

    #[test]
    fn test_compact_lines_put_value_after_label() {
        assert_eq!(
            text(&compact_field_lines(QuoteField::Name, "Ada", false)),
            vec![format!("{:<COMPACT_LABEL_WIDTH$}Ada", "Name *")]
        );
        assert_eq!(
            text(&compact_field_lines(QuoteField::Budget, "25000+", false)),
            vec![format!("{:<COMPACT_LABEL_WIDTH$}$25,000+", "Budget Range *")]
        );
    }

    #[test]
    fn test_compact_labels_fit_their_column() {
        for field in QuoteField::ALL {
            let label = compact_label(field);
            assert_eq!(label.chars().count(), COMPACT_LABEL_WIDTH);
            assert!(label.ends_with(' '), "{label:?}");
        }
    }

    #[test]
    fn test_compact_multiline_indents_continuation() {
        let lines = text(&compact_field_lines(QuoteField::Description, "one\ntwo", false));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("one"));
        assert_eq!(lines[1], format!("{}two", " ".repeat(COMPACT_LABEL_WIDTH)));
    }
}
