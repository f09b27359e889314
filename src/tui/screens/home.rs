//! Home section — the hero banner.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content;
use crate::tui::theme::Theme;

/// Renders the hero: headline, clinic blurb, and the book call-to-action.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_home(theme: &Theme, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_top, title_area, blurb_area, cta_area, _rest] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    let bold = Modifier::BOLD;
    let title = Line::from(vec![
        Span::styled("Expert ", Style::default().fg(theme.text).add_modifier(bold)),
        Span::styled(
            "Physiotherapy",
            Style::default().fg(theme.primary).add_modifier(bold),
        ),
        Span::styled(
            " Care for ",
            Style::default().fg(theme.text).add_modifier(bold),
        ),
        Span::styled(
            "Pain Relief",
            Style::default().fg(theme.secondary).add_modifier(bold),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);

    frame.render_widget(
        Paragraph::new(content::clinic().tagline)
            .style(Style::default().fg(theme.text_light))
            .wrap(Wrap { trim: true }),
        blurb_area,
    );

    frame.render_widget(
        Paragraph::new("[B] Book an Appointment").style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        cta_area,
    );
}
