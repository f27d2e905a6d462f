use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const ADDR: Color = Color::BrightWhite;
pub const MATCH: Color = Color::Green;
pub const MISMATCH: Color = Color::Red;
