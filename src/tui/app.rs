use std::time::{Duration, Instant};

use chrono::{Datelike, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    ContactState, TestimonialsState, draw_about, draw_contact, draw_home, draw_resources,
    draw_services, draw_testimonials,
};
use super::theme::Theme;
use super::widgets::draw_nav_bar;

/// How often the event loop wakes up to drive timers (form auto-reset,
/// carousel autoplay) when no input arrives.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// All page sections the app can navigate between, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Hero banner.
    Home,
    /// Doctor bio.
    About,
    /// Treatment gallery.
    Services,
    /// Patient review carousel.
    Testimonials,
    /// Patient resources grid.
    Resources,
    /// Contact/appointment form and map.
    Contact,
}

impl Section {
    /// Page order, used for the nav bar and number-key jumps.
    pub const ALL: [Section; 6] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Testimonials,
        Self::Resources,
        Self::Contact,
    ];

    /// Nav label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Testimonials => "Testimonials",
            Self::Resources => "Resources",
            Self::Contact => "Contact",
        }
    }

    /// Next section in page order, wrapping.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous section in page order, wrapping.
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Top-level application state.
pub struct App {
    section: Section,
    dark_mode: bool,
    contact: ContactState,
    testimonials: TestimonialsState,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` starting on the [`Section::Home`] section in
    /// light mode.
    pub fn new() -> Self {
        Self {
            section: Section::Home,
            dark_mode: false,
            contact: ContactState::new(),
            testimonials: TestimonialsState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll → dispatch → tick → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key, Instant::now());
            }
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handles a key event. The contact section owns its keys outright
    /// (characters are form input there); everywhere else the section gets
    /// first refusal and the global bindings pick up the rest.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.section {
            Section::Contact => self.contact.handle_key(key, now),
            Section::Testimonials => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    self.testimonials.handle_key(key, now)
                }
                _ => self.global_action(key),
            },
            _ => self.global_action(key),
        };
        self.apply(action);
    }

    /// Bindings shared by all browsing sections.
    fn global_action(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.section == Section::Home {
                    Action::Quit
                } else {
                    Action::Navigate(Section::Home)
                }
            }
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('b') => Action::Navigate(Section::Contact),
            KeyCode::Char(c @ '1'..='6') => {
                let i = usize::from(c as u8 - b'1');
                Action::Navigate(Section::ALL[i])
            }
            KeyCode::Tab => Action::Navigate(self.section.next()),
            KeyCode::BackTab => Action::Navigate(self.section.prev()),
            _ => Action::None,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(section) => self.section = section,
            Action::ToggleTheme => self.dark_mode = !self.dark_mode,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Drives the time-based state: the form's auto-reset window and the
    /// carousel's autoplay.
    pub fn tick(&mut self, now: Instant) {
        self.contact.tick(now);
        self.testimonials.tick(now);
    }

    /// Renders the header, the current section, and the footer.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn draw(&self, frame: &mut Frame) {
        let theme = Theme::for_mode(self.dark_mode);
        let [nav_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        draw_nav_bar(self.section, self.dark_mode, &theme, frame, nav_area);

        match self.section {
            Section::Home => draw_home(&theme, frame, body_area),
            Section::About => draw_about(&theme, frame, body_area),
            Section::Services => draw_services(&theme, frame, body_area),
            Section::Testimonials => draw_testimonials(&self.testimonials, &theme, frame, body_area),
            Section::Resources => draw_resources(&theme, frame, body_area),
            Section::Contact => draw_contact(&self.contact, &theme, frame, body_area),
        }

        // Hints and copyright split the footer row so the copyright stays
        // whole; on a narrow terminal the hints give way first.
        let copyright = format!(
            "© {} RelivaWell Physiotherapy Clinic. All Rights Reserved.",
            Utc::now().year(),
        );
        let [hints_area, copyright_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(copyright.chars().count() as u16),
        ])
        .areas(footer_area);
        let footer_style = Style::default().fg(theme.text_light);
        frame.render_widget(
            Paragraph::new("1-6 sections  Tab next  T theme  B book  Q quit").style(footer_style),
            hints_area,
        );
        frame.render_widget(Paragraph::new(copyright).style(footer_style), copyright_area);
    }

    /// Returns the current section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns `true` if the dark palette is active.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the contact section state.
    pub fn contact(&self) -> &ContactState {
        &self.contact
    }
}
