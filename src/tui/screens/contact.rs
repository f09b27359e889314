//! Contact section — tabbed contact/appointment form plus the location map.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content;
use crate::form::{ContactForm, Field, Tab};
use crate::tui::action::Action;
use crate::tui::app::Section;
use crate::tui::theme::Theme;
use crate::tui::widgets::{
    DEFAULT_ZOOM, FIELD_ROW_HEIGHT, FieldRow, MapView, draw_field, draw_map,
};

/// Fields shown on the Contact tab, in focus order.
const CONTACT_FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Phone, Field::Message];
/// Fields shown on the Appointment tab, in focus order.
const APPOINTMENT_FIELDS: &[Field] = &[
    Field::Name,
    Field::Email,
    Field::Phone,
    Field::Date,
    Field::Time,
    Field::Reason,
];

/// State for the contact section: the form core, the focused input, and the
/// map panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactState {
    form: ContactForm,
    focus: usize,
    map: MapView,
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactState {
    pub fn new() -> Self {
        let clinic = content::clinic();
        Self {
            form: ContactForm::new(),
            focus: 0,
            map: MapView::new(clinic.latitude, clinic.longitude, DEFAULT_ZOOM),
        }
    }

    /// Fields visible on the active tab, in focus order.
    pub fn visible_fields(&self) -> &'static [Field] {
        match self.form.active_tab() {
            Tab::Contact => CONTACT_FIELDS,
            Tab::Appointment => APPOINTMENT_FIELDS,
        }
    }

    /// The field that currently receives typed characters.
    pub fn focused_field(&self) -> Field {
        self.visible_fields()[self.focus]
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Handles a key event.
    ///
    /// While the confirmation view is up, edits are refused by the form core
    /// itself; only tab switching and leaving the section have any effect,
    /// so a second Enter cannot re-submit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Action {
        match key.code {
            KeyCode::Esc => return Action::Navigate(Section::Home),
            KeyCode::Tab => self.focus = (self.focus + 1) % self.visible_fields().len(),
            KeyCode::BackTab => {
                let len = self.visible_fields().len();
                self.focus = (self.focus + len - 1) % len;
            }
            KeyCode::Left => self.switch_tab(Tab::Contact),
            KeyCode::Right => self.switch_tab(Tab::Appointment),
            KeyCode::Enter => {
                // A real site would transmit here; the composed payload is
                // dropped instead.
                let _submission = self.form.submit(now);
            }
            KeyCode::Char(ch) => self.form.insert_char(self.focused_field(), ch),
            KeyCode::Backspace => self.form.delete_char(self.focused_field()),
            KeyCode::PageUp => self.map.zoom_in(),
            KeyCode::PageDown => self.map.zoom_out(),
            KeyCode::Home => self.map.set_zoom(DEFAULT_ZOOM),
            _ => {}
        }
        Action::None
    }

    /// Drives the post-submit reset window from the event loop.
    pub fn tick(&mut self, now: Instant) {
        if self.form.tick(now) {
            self.focus = 0;
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.form.set_active_tab(tab);
        // The Contact tab has fewer inputs; keep the focus in range.
        self.focus = self.focus.min(self.visible_fields().len() - 1);
    }
}

/// Renders the contact section: tab selector, then either the form inputs or
/// the confirmation view, then the map panel.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_contact(state: &ContactState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Contact Our Clinic ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_height = if state.form().submitted() {
        4
    } else {
        FIELD_ROW_HEIGHT * state.visible_fields().len() as u16 + 1
    };
    let [tabs_area, body_area, _gap, map_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(form_height),
        Constraint::Min(0),
        Constraint::Length(6),
    ])
    .areas(inner);

    draw_tabs(state.form().active_tab(), theme, frame, tabs_area);

    if state.form().submitted() {
        draw_confirmation(state.form().active_tab(), theme, frame, body_area);
    } else {
        draw_inputs(state, theme, frame, body_area);
    }

    let clinic = content::clinic();
    draw_map(state.map(), clinic.address, clinic.hours, theme, frame, map_area);
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_tabs(active: Tab, theme: &Theme, frame: &mut Frame, area: Rect) {
    let tab_span = |label: &'static str, tab: Tab| {
        if tab == active {
            Span::styled(
                format!("[{label}]"),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(theme.text_light))
        }
    };
    let line = Line::from(vec![
        tab_span("Contact Us", Tab::Contact),
        Span::raw("  "),
        tab_span("Book Appointment", Tab::Appointment),
        Span::styled("   (◀/▶ to switch)", Style::default().fg(theme.text_light)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_inputs(state: &ContactState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let fields = state.visible_fields();
    let mut constraints = vec![Constraint::Length(FIELD_ROW_HEIGHT); fields.len()];
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(area);

    let form = state.form();
    let tab = form.active_tab();
    for (i, field) in fields.iter().enumerate() {
        let row = FieldRow {
            label: field.label(),
            value: form.value(*field),
            error: form.error(*field).map(|e| e.message()),
            required: field.required(tab),
            focused: i == state.focus,
        };
        draw_field(&row, theme, frame, rows[i]);
    }

    let submit_label = match tab {
        Tab::Contact => "Enter: Send Message",
        Tab::Appointment => "Enter: Book Appointment",
    };
    let footer = format!("Tab/Shift+Tab: next/prev field  {submit_label}  Esc: back");
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(theme.text_light)),
        rows[fields.len()],
    );
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_confirmation(tab: Tab, theme: &Theme, frame: &mut Frame, area: Rect) {
    let message = match tab {
        Tab::Contact => "Your message has been sent successfully. We will get back to you soon.",
        Tab::Appointment => {
            "Your appointment request has been received. We will confirm your booking shortly."
        }
    };
    let lines = vec![
        Line::styled(
            "Thank You!",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(message, Style::default().fg(theme.text)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
