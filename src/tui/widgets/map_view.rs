//! Schematic map panel for the clinic location.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::theme::Theme;

/// Smallest zoom level (whole city out).
pub const MIN_ZOOM: u8 = 1;
/// Largest zoom level (street detail).
pub const MAX_ZOOM: u8 = 18;
/// Zoom level the panel opens at and returns to on reset.
pub const DEFAULT_ZOOM: u8 = 13;

/// Fixed-center map with a zoom control, standing in for the tile widget on
/// the web page. Tile rendering is out of scope; the panel draws the marker,
/// coordinates, and a zoom gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    latitude: f64,
    longitude: f64,
    zoom: u8,
}

impl MapView {
    /// Creates a map centered on the given coordinates. Zoom is clamped to
    /// the valid range.
    pub fn new(latitude: f64, longitude: f64, zoom: u8) -> Self {
        Self {
            latitude,
            longitude,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Zooms in one level, saturating at [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    /// Zooms out one level, saturating at [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Sets an absolute zoom level, clamped to the valid range.
    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Renders the map panel: marker line, zoom gauge, address and hours.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_map(
    map: &MapView,
    address: &str,
    hours: &str,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Our Location ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [marker_area, gauge_area, address_area, hours_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let marker = Line::from(vec![
        Span::styled("⌖ ", Style::default().fg(theme.error)),
        Span::styled(
            format!("{:.4}, {:.4}", map.latitude(), map.longitude()),
            Style::default().fg(theme.text),
        ),
    ]);
    frame.render_widget(Paragraph::new(marker), marker_area);

    let filled = usize::from(map.zoom());
    let gauge = format!(
        "zoom [{}{}] {:>2}/{}  (PgUp/PgDn, Home resets)",
        "#".repeat(filled),
        ".".repeat(usize::from(MAX_ZOOM) - filled),
        map.zoom(),
        MAX_ZOOM,
    );
    frame.render_widget(
        Paragraph::new(gauge).style(Style::default().fg(theme.text_light)),
        gauge_area,
    );

    frame.render_widget(
        Paragraph::new(address).style(Style::default().fg(theme.text_light)),
        address_area,
    );
    frame.render_widget(
        Paragraph::new(hours).style(Style::default().fg(theme.text_light)),
        hours_area,
    );
}
