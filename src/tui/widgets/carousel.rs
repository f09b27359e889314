//! Rotating-card state for the testimonial section.

use std::time::{Duration, Instant};

/// Cursor over a fixed-length list of cards, with infinite wrap and optional
/// autoplay.
///
/// Autoplay is driven by the event-loop tick rather than a detached timer:
/// the next-advance deadline is plain data, so dropping the carousel cancels
/// it. Manual navigation re-arms the deadline so a card the user just picked
/// gets a full interval on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: bool,
    interval: Duration,
    next_advance: Option<Instant>,
}

impl Carousel {
    /// Creates a carousel over `len` cards with autoplay enabled.
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            autoplay: true,
            interval,
            next_advance: None,
        }
    }

    /// Index of the card currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Advances to the next card, wrapping, and re-arms autoplay.
    pub fn next(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.rearm(now);
    }

    /// Moves to the previous card, wrapping, and re-arms autoplay.
    pub fn prev(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.rearm(now);
    }

    /// Toggles autoplay. Re-enabling starts a fresh interval.
    pub fn toggle_autoplay(&mut self, now: Instant) {
        self.autoplay = !self.autoplay;
        self.rearm(now);
    }

    /// Drives autoplay from the event loop. Returns `true` if the carousel
    /// advanced on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.autoplay || self.len == 0 {
            return false;
        }
        match self.next_advance {
            None => {
                // First tick after construction or re-enable arms the timer.
                self.next_advance = Some(now + self.interval);
                false
            }
            Some(at) if now >= at => {
                self.index = (self.index + 1) % self.len;
                self.next_advance = Some(now + self.interval);
                true
            }
            Some(_) => false,
        }
    }

    fn rearm(&mut self, now: Instant) {
        self.next_advance = self.autoplay.then(|| now + self.interval);
    }
}
