use super::keypad::ButtonKind;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub screen_bg: Color, // Aquamarine-ish display background
    pub status_bg: Color,
    pub digit: Color,    // Beige
    pub operator: Color, // Light grey
    pub clear: Color,    // Misty rose
    pub equals: Color,   // Ghost white
    pub memory: Color,
}

impl Theme {
    /// Background color for a keypad button
    pub fn button(&self, kind: ButtonKind) -> Color {
        match kind {
            ButtonKind::Digit => self.digit,
            ButtonKind::Operator => self.operator,
            ButtonKind::Clear => self.clear,
            ButtonKind::Equals => self.equals,
            ButtonKind::Memory => self.memory,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the cursor
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    screen_bg: Color::Rgb(148, 226, 213),      // Teal screen
    status_bg: Color::Rgb(50, 50, 70),
    digit: Color::Rgb(245, 245, 220),
    operator: Color::Rgb(211, 211, 211),
    clear: Color::Rgb(255, 228, 225),
    equals: Color::Rgb(248, 248, 255),
    memory: Color::Rgb(203, 166, 247), // Mauve
};
