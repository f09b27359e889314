//! Header bar: clinic wordmark, section tabs, and the inert auth buttons.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::Section;
use crate::tui::theme::Theme;

/// Renders the one-line header.
///
/// Layout: `RelivaWell  Home About Services Testimonials Resources Contact
/// [Login] [Sign Up] ◐`. The active section is highlighted; Login/Sign Up
/// are rendered but do nothing, same as the page.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_nav_bar(active: Section, dark_mode: bool, theme: &Theme, frame: &mut Frame, area: Rect) {
    let mut spans: Vec<Span> = vec![
        Span::styled(
            "RelivaWell",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == active {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_light)
        };
        spans.push(Span::styled(format!("{} {}", i + 1, section.label()), style));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        "[Login] [Sign Up]",
        Style::default().fg(theme.text_light),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        if dark_mode { "☾" } else { "☀" },
        Style::default().fg(theme.secondary),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
