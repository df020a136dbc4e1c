use ratatui::style::Color;

/// Fixed midnight palette for the formula panel.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub chip: Color,
    pub operator: Color,
    pub highlight: Color,
    pub dimmed: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),  // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),     // #A9B1D6 Light Blue
            chip: Color::Rgb(122, 162, 247),     // #7AA2F7 Chip Blue
            operator: Color::Rgb(224, 175, 104), // #E0AF68 Amber
            highlight: Color::Rgb(158, 206, 106), // #9ECE6A Green
            dimmed: Color::Rgb(100, 110, 150),   // #646E96 Dimmed Blue
            error: Color::Rgb(247, 118, 142),    // #F7768E Coral Red
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn chip() -> Color {
        Theme::current().chip
    }
    pub fn operator() -> Color {
        Theme::current().operator
    }
    pub fn highlight() -> Color {
        Theme::current().highlight
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn error() -> Color {
        Theme::current().error
    }
}
