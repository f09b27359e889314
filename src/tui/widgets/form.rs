//! Field-row rendering for the contact/appointment form.
//!
//! Values and errors live on [`ContactForm`](crate::form::ContactForm); this
//! module only knows how to draw one field row in the house style: bordered
//! input, `*` on required labels, red border plus inline message on error,
//! and a block cursor on the focused field.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::theme::Theme;

/// Height of one rendered field row, border included.
pub const FIELD_ROW_HEIGHT: u16 = 3;

/// Everything needed to draw a single input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<&'static str>,
    pub required: bool,
    pub focused: bool,
}

/// Renders one input row into `area` (expected [`FIELD_ROW_HEIGHT`] tall).
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_field(row: &FieldRow, theme: &Theme, frame: &mut Frame, area: Rect) {
    let border_color = if row.error.is_some() {
        theme.error
    } else if row.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let label = if row.required {
        format!("{} *", row.label)
    } else {
        row.label.to_string()
    };

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = vec![Span::styled(row.value, Style::default().fg(theme.text))];
    if row.focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if let Some(err) = row.error {
        let err_area = Rect {
            x: area.x + 2,
            y: area.y + FIELD_ROW_HEIGHT.saturating_sub(1),
            width: area.width.saturating_sub(4),
            height: 1,
        };
        // Overlaps the bottom border of the row, like the web page renders
        // the message tight under the input.
        frame.render_widget(
            Paragraph::new(Span::styled(err, Style::default().fg(theme.error))),
            err_area,
        );
    }
}
