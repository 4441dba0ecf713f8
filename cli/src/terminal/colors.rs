use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 165, b: 0 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };

pub const ACTIVITY: Color = Color::Cyan;
pub const HOURS: Color = Color::Yellow;
pub const COMPLETED: Color = Color::Green;
pub const PENDING: Color = Color::Red;

pub const UNDERWEIGHT: Color = Color::Yellow;
pub const NORMAL: Color = Color::Green;
pub const OVERWEIGHT: Color = Color::Red;
