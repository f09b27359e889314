//! Testimonials section — the patient review carousel.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content::{self, Testimonial};
use crate::tui::action::Action;
use crate::tui::theme::Theme;
use crate::tui::widgets::{Carousel, star_line};

/// Autoplay interval between cards, same as the web carousel.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// State for the testimonials section.
#[derive(Debug, Clone)]
pub struct TestimonialsState {
    testimonials: Vec<Testimonial>,
    carousel: Carousel,
}

impl Default for TestimonialsState {
    fn default() -> Self {
        Self::new()
    }
}

impl TestimonialsState {
    pub fn new() -> Self {
        let testimonials = content::testimonials();
        let carousel = Carousel::new(testimonials.len(), AUTOPLAY_INTERVAL);
        Self {
            testimonials,
            carousel,
        }
    }

    /// Handles a key event. Arrow keys page through cards, space pauses or
    /// resumes autoplay; everything else is left to the app.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Action {
        match key.code {
            KeyCode::Right => {
                self.carousel.next(now);
                Action::None
            }
            KeyCode::Left => {
                self.carousel.prev(now);
                Action::None
            }
            KeyCode::Char(' ') => {
                self.carousel.toggle_autoplay(now);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Advances autoplay from the event loop.
    pub fn tick(&mut self, now: Instant) {
        self.carousel.tick(now);
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    fn current(&self) -> Option<&Testimonial> {
        self.testimonials.get(self.carousel.index())
    }
}

/// Renders the card under the carousel cursor plus a position indicator.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_testimonials(state: &TestimonialsState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" What Our Patients Say ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(card) = state.current() else {
        return;
    };

    let [_top, text_area, author_area, role_area, stars_area, _gap, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    frame.render_widget(
        Paragraph::new(format!("\"{}\"", card.text))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::ITALIC),
            )
            .wrap(Wrap { trim: true }),
        text_area,
    );
    frame.render_widget(
        Paragraph::new(card.author)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        author_area,
    );
    frame.render_widget(
        Paragraph::new(card.role)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text_light)),
        role_area,
    );
    frame.render_widget(
        Paragraph::new(star_line(card.rating, 5, theme)).alignment(Alignment::Center),
        stars_area,
    );

    let autoplay = if state.carousel.autoplay() {
        "autoplay on"
    } else {
        "paused"
    };
    let footer = format!(
        "◀ ▶ browse  Space: pause  |  {} / {}  ({autoplay})",
        state.carousel.index() + 1,
        state.carousel.len(),
    );
    frame.render_widget(
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text_light)),
        footer_area,
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_page_through_cards() {
        let mut state = TestimonialsState::new();
        let t = Instant::now();
        state.handle_key(press(KeyCode::Right), t);
        assert_eq!(state.carousel().index(), 1);
        state.handle_key(press(KeyCode::Left), t);
        state.handle_key(press(KeyCode::Left), t);
        assert_eq!(state.carousel().index(), 2);
    }

    #[test]
    fn space_toggles_autoplay() {
        let mut state = TestimonialsState::new();
        let t = Instant::now();
        assert!(state.carousel().autoplay());
        state.handle_key(press(KeyCode::Char(' ')), t);
        assert!(!state.carousel().autoplay());
    }

    #[test]
    fn tick_drives_autoplay() {
        let mut state = TestimonialsState::new();
        let t = Instant::now();
        state.tick(t); // arm
        state.tick(t + AUTOPLAY_INTERVAL);
        assert_eq!(state.carousel().index(), 1);
    }

    #[test]
    fn unhandled_key_returns_none() {
        let mut state = TestimonialsState::new();
        let action = state.handle_key(press(KeyCode::Char('x')), Instant::now());
        assert_eq!(action, Action::None);
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn render(state: &TestimonialsState) -> String {
            let backend = TestBackend::new(90, 14);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_testimonials(state, &Theme::light(), frame, frame.area()))
                .unwrap();
            let buf = terminal.backend().buffer();
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        #[test]
        fn shows_first_card_by_default() {
            let state = TestimonialsState::new();
            let output = render(&state);
            assert!(output.contains("Priya Mehta"));
            assert!(output.contains("1 / 3"));
        }

        #[test]
        fn shows_card_under_cursor() {
            let mut state = TestimonialsState::new();
            state.handle_key(press(KeyCode::Right), Instant::now());
            let output = render(&state);
            assert!(output.contains("Rahul Sharma"));
            assert!(output.contains("Athlete"));
            assert!(output.contains("2 / 3"));
        }
    }
}
