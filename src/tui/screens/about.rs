//! About section — the doctor bio.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content;
use crate::tui::theme::Theme;
use crate::tui::widgets::star_line;

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_about(theme: &Theme, frame: &mut Frame, area: Rect) {
    let doctor = content::doctor();

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_area, specialty_area, creds_area, rating_area, _gap, bio_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

    frame.render_widget(
        Paragraph::new(doctor.name).style(
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        name_area,
    );
    frame.render_widget(
        Paragraph::new(doctor.specialty).style(Style::default().fg(theme.text_light)),
        specialty_area,
    );
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(format!("🎓 {}", doctor.qualifications)),
            Line::from(format!("🕐 {}+ Years of Experience", doctor.years_experience)),
        ])
        .style(Style::default().fg(theme.text_light)),
        creds_area,
    );

    // Round the average score to whole stars; the exact figure follows.
    let filled = doctor.rating.round() as u8;
    let mut rating = star_line(filled, 5, theme);
    rating.push_span(Span::styled(
        format!("  {} ({} reviews)", doctor.rating, doctor.review_count),
        Style::default().fg(theme.text_light),
    ));
    frame.render_widget(Paragraph::new(rating), rating_area);

    frame.render_widget(
        Paragraph::new(doctor.bio)
            .style(Style::default().fg(theme.text_light))
            .wrap(Wrap { trim: true }),
        bio_area,
    );
}
