//! Terminal highlighting helpers built on top of [colored].

use std::ops::BitOr;

use colored::{Color, ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Yellow,
    Blue,
    Magenta,
}

impl From<Colour> for Color {
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::Red => Color::Red,
            Colour::Yellow => Color::Yellow,
            Colour::Blue => Color::Blue,
            Colour::Magenta => Color::Magenta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Bold,
}

/// A [Colour] with optional [Modifier]s, built with `|`, e.g.
/// `Colour::Red | Modifier::Bold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    colour: Colour,
    bold: bool,
}

impl Style {
    fn apply(self, message: &str) -> ColoredString {
        let styled = message.color(Color::from(self.colour));
        if self.bold { styled.bold() } else { styled }
    }
}

impl From<Colour> for Style {
    fn from(colour: Colour) -> Self {
        Style { colour, bold: false }
    }
}

impl BitOr<Modifier> for Colour {
    type Output = Style;

    fn bitor(self, rhs: Modifier) -> Style {
        match rhs {
            Modifier::Bold => Style { colour: self, bold: true },
        }
    }
}

/// Highlight `message` with the given style. Whether escape codes are
/// actually emitted is decided by [colored] (`NO_COLOR`, `CLICOLOR_FORCE`).
pub fn highlight(style: impl Into<Style>, message: impl AsRef<str>) -> String {
    style.into().apply(message.as_ref()).to_string()
}
