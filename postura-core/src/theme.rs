//! Dashboard color themes.
//!
//! The live card keeps its signal colors (green/amber/red) in both themes;
//! only the chrome around it changes.

use crate::posture::PostureStatus;

/// A named dashboard color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Light, ThemeName::Dark]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Light => "Light",
            ThemeName::Dark => "Dark",
        }
    }

    pub fn from_str(s: &str) -> Option<ThemeName> {
        match s.to_lowercase().as_str() {
            "light" => Some(ThemeName::Light),
            "dark" => Some(ThemeName::Dark),
            _ => None,
        }
    }

    /// The other theme (the header sun/moon toggle).
    pub fn toggled(&self) -> ThemeName {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }
}

/// An sRGB color, straight from the dashboard's hex palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Chrome colors for a theme.
pub struct Palette {
    pub screen_bg: Rgb,
    pub card_bg: Rgb,
    pub header_bg: Rgb,
    pub text_primary: Rgb,
    pub text_muted: Rgb,
}

pub fn palette_for(theme: ThemeName) -> Palette {
    match theme {
        ThemeName::Light => Palette {
            screen_bg: Rgb(0xf9, 0xfa, 0xfb),
            card_bg: Rgb(0xff, 0xff, 0xff),
            header_bg: Rgb(0x1e, 0x29, 0x3b),
            text_primary: Rgb(0x11, 0x18, 0x27),
            text_muted: Rgb(0x4b, 0x55, 0x63),
        },
        ThemeName::Dark => Palette {
            screen_bg: Rgb(0x0a, 0x0e, 0x27),
            card_bg: Rgb(0x0f, 0x15, 0x35),
            header_bg: Rgb(0x0f, 0x15, 0x35),
            text_primary: Rgb(0xff, 0xff, 0xff),
            text_muted: Rgb(0x9c, 0xa3, 0xaf),
        },
    }
}

/// Background color of the live card for a status. Theme-independent.
pub fn status_color(status: PostureStatus) -> Rgb {
    match status {
        PostureStatus::Excellent => Rgb(0x10, 0xb9, 0x81), // green
        PostureStatus::Warning => Rgb(0xf5, 0x9e, 0x0b),   // amber
        PostureStatus::Poor => Rgb(0xef, 0x44, 0x44),      // red
    }
}
