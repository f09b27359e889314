//! Light/dark color palettes, mirrored from the clinic's web styling.

use ratatui::style::Color;

/// Colors used across all sections. Held by the `App` and passed to every
/// draw function so the whole page flips at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Brand green, used for headings and highlights.
    pub primary: Color,
    /// Accent blue.
    pub secondary: Color,
    pub text: Color,
    pub text_light: Color,
    /// Filled star color.
    pub star: Color,
    pub error: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(5, 150, 105),
            secondary: Color::Rgb(59, 130, 246),
            text: Color::Rgb(51, 51, 51),
            text_light: Color::Rgb(102, 102, 102),
            star: Color::Rgb(245, 158, 11),
            error: Color::Rgb(239, 68, 68),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(16, 185, 129),
            secondary: Color::Rgb(96, 165, 250),
            text: Color::Rgb(248, 250, 252),
            text_light: Color::Rgb(148, 163, 184),
            star: Color::Rgb(245, 158, 11),
            error: Color::Rgb(239, 68, 68),
        }
    }

    /// Palette for the given mode.
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_select_distinct_palettes() {
        assert_eq!(Theme::for_mode(false), Theme::light());
        assert_eq!(Theme::for_mode(true), Theme::dark());
        assert_ne!(Theme::light().text, Theme::dark().text);
    }
}
