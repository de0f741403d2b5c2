use serde::{Deserialize, Serialize};

use crate::constants::{SCROLL_BUFFER_VIEWPORTS, SECTION_VIEWPORTS};

/// A single sRGB color. Parsed from and formatted as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex string. Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation per channel, rounding to the nearest step.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

/// The pair of colors behind the page gradient at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl Theme {
    pub const fn new(primary: Rgb, secondary: Rgb) -> Self {
        Self { primary, secondary }
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            primary: self.primary.lerp(other.primary, t),
            secondary: self.secondary.lerp(other.secondary, t),
        }
    }
}

/// The fixed theme sequence the page cycles through while scrolling.
pub const THEMES: [Theme; 6] = [
    // Same darker green for both
    Theme::new(Rgb::new(0x4c, 0xaf, 0x50), Rgb::new(0x4c, 0xaf, 0x50)),
    // Pink & Blue
    Theme::new(Rgb::new(0xff, 0xb5, 0xe8), Rgb::new(0xb5, 0xde, 0xff)),
    // Mint & Coral
    Theme::new(Rgb::new(0xb5, 0xff, 0xe1), Rgb::new(0xff, 0xb5, 0xb5)),
    // Pink & Purple
    Theme::new(Rgb::new(0xff, 0xb5, 0xd8), Rgb::new(0xd8, 0xb5, 0xff)),
    // Purple & Mint
    Theme::new(Rgb::new(0xd8, 0xb5, 0xff), Rgb::new(0xb5, 0xff, 0xe1)),
    // Peach & Blue
    Theme::new(Rgb::new(0xff, 0xd8, 0xb5), Rgb::new(0xb5, 0xde, 0xff)),
];

/// Maps a scroll offset to the displayed theme.
///
/// The first `SCROLL_BUFFER_VIEWPORTS` viewport-heights hold the opening
/// theme. Past the buffer, each section of `SECTION_VIEWPORTS`
/// viewport-heights blends one theme into the next, wrapping around the
/// sequence indefinitely.
pub fn theme_for_scroll(scroll_y: f64, viewport_height: f64) -> Theme {
    if viewport_height <= 0.0 || !scroll_y.is_finite() {
        return THEMES[0];
    }

    let buffer = viewport_height * SCROLL_BUFFER_VIEWPORTS;
    if scroll_y < buffer {
        return THEMES[0];
    }

    let section = viewport_height * SECTION_VIEWPORTS;
    let adjusted = scroll_y - buffer;
    let index = ((adjusted / section).floor() as usize) % THEMES.len();
    let next = (index + 1) % THEMES.len();
    let progress = (adjusted % section) / section;

    THEMES[index].lerp(THEMES[next], progress)
}
