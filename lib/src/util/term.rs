//! Console colors.
//!
//! The full set of foreground/background attribute combinations of a classic
//! 16-color console, mapped to ANSI SGR escape codes.

use strum::{Display, EnumIter, EnumString};

/// A 16-color console color.  Names follow the classic console palette;
/// `Silver` through `White` are the high-intensity half.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Black,
    Maroon,
    Green,
    Olive,
    Navy,
    Purple,
    Teal,
    Gray,
    Silver,
    Red,
    Lime,
    Yellow,
    Blue,
    Fuchsia,
    Aqua,
    White,
}

impl Color {
    /// SGR code selecting this color as the foreground.
    pub fn fg_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Maroon => 31,
            Color::Green => 32,
            Color::Olive => 33,
            Color::Navy => 34,
            Color::Purple => 35,
            Color::Teal => 36,
            Color::Gray => 37,
            Color::Silver => 90,
            Color::Red => 91,
            Color::Lime => 92,
            Color::Yellow => 93,
            Color::Blue => 94,
            Color::Fuchsia => 95,
            Color::Aqua => 96,
            Color::White => 97,
        }
    }

    /// SGR code selecting this color as the background.
    pub fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

const RESET: &str = "\x1b[0m";

/// Wrap `text` in escape codes setting the foreground color.
pub fn paint(text: &str, fg: Color) -> String {
    format!("\x1b[{}m{text}{RESET}", fg.fg_code())
}

/// Wrap `text` in escape codes setting foreground and background colors.
pub fn paint_on(text: &str, fg: Color, bg: Color) -> String {
    format!("\x1b[{};{}m{text}{RESET}", fg.fg_code(), bg.bg_code())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use super::{paint, paint_on, Color};

    #[test]
    fn paint_wraps_text_with_codes() {
        assert_eq!(paint("hi", Color::Red), "\x1b[91mhi\x1b[0m");
        assert_eq!(paint_on("hi", Color::White, Color::Navy),
                   "\x1b[97;44mhi\x1b[0m");
    }

    #[test]
    fn background_codes_offset_foreground_codes() {
        for color in Color::iter() {
            assert_eq!(color.bg_code(), color.fg_code() + 10);
        }
    }

    #[test]
    fn names_round_trip() {
        for color in Color::iter() {
            assert_eq!(Color::from_str(&color.to_string()).unwrap(), color);
        }
    }
}
