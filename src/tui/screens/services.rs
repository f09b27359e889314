//! Services section — the treatment gallery.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content;
use crate::tui::theme::Theme;

/// Renders the services gallery as a 4x2 grid of titled cards.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_services(theme: &Theme, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Our Services: Specialized Physiotherapy Treatments ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let services = content::services();
    let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(inner);
    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(*row_area);
        for (c, col_area) in cols.iter().enumerate() {
            let Some(service) = services.get(r * 4 + c) else {
                continue;
            };
            let card = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_light));
            frame.render_widget(
                Paragraph::new(service.title)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.text))
                    .wrap(Wrap { trim: true })
                    .block(card),
                *col_area,
            );
        }
    }
}
