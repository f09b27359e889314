//! Star-rating rendering shared by the doctor bio and the testimonials.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::theme::Theme;

/// A row of `max` stars with the first `filled` lit in the star color.
pub fn star_line(filled: u8, max: u8, theme: &Theme) -> Line<'static> {
    let filled = filled.min(max);
    let mut spans = Vec::with_capacity(usize::from(max));
    for i in 0..max {
        let (symbol, color) = if i < filled {
            ("★", theme.star)
        } else {
            ("☆", theme.text_light)
        };
        spans.push(Span::styled(symbol, Style::default().fg(color)));
    }
    Line::from(spans)
}
