//! Light and dark palettes.
//!
//! The calculator core knows nothing about colours. The presentation layer
//! asks a [`Theme`] for a [`Palette`] and paints with it.

use serde::{Deserialize, Serialize};

/// A 24-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}

/// Colours used to draw the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    /// Pending-operator indicator.
    pub accent: Rgb,
}

const ACCENT: Rgb = Rgb::from_hex(0xFF9500);

const LIGHT: Palette = Palette {
    background: Rgb::from_hex(0xFFFFFF),
    foreground: Rgb::from_hex(0x000000),
    accent: ACCENT,
};

const DARK: Palette = Palette {
    background: Rgb::from_hex(0x1C1C1E),
    foreground: Rgb::from_hex(0xFFFFFF),
    accent: ACCENT,
};

/// Capability the renderer draws with.
pub trait Theme {
    fn palette(&self) -> Palette;
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Theme for ThemeMode {
    fn palette(&self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

/// Wrap `text` in ANSI escapes for the given foreground and background.
pub fn paint(text: &str, fg: Rgb, bg: Rgb) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}\x1b[0m",
        fg.r, fg.g, fg.b, bg.r, bg.g, bg.b, text
    )
}
