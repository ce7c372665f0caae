//! Brand color parsing and shade-ramp derivation.
//!
//! Every brand color (primary, secondary, accent) expands into ten shade
//! levels, `50` through `900`. Levels below `500` move each RGB channel
//! toward white, levels above `500` scale each channel toward black, and
//! `500` is the base color itself.
//!
//! # Algorithm
//!
//! For a channel `c` and a signed factor `f`:
//!
//! | factor | output |
//! |--------|--------|
//! | `f > 0` | `round(c + (255 - c) * f)` |
//! | `f < 0` | `round(c * (1 + f))` |
//! | `f = 0` | `c` |
//!
//! The result is clamped to `[0, 255]`. Channels are interpolated linearly
//! and independently in RGB space, not in HSL or LAB. Rendered UI colors
//! are matched against these exact values, so the arithmetic must not be
//! changed to a perceptual model.

use std::fmt;

/// Shade levels and their signed lightness factors, lightest first.
pub const SHADE_LEVELS: [(u16, f64); 10] = [
    (50, 0.95),
    (100, 0.90),
    (200, 0.80),
    (300, 0.60),
    (400, 0.40),
    (500, 0.0),
    (600, -0.10),
    (700, -0.20),
    (800, -0.30),
    (900, -0.40),
];

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Comma-separated channel list (`"14, 165, 233"`), used to build
    /// translucent `rgba(...)` colors from a CSS variable.
    pub fn to_channel_list(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// Apply a signed lightness factor to every channel.
    pub fn shade(self, factor: f64) -> Self {
        Self {
            r: shade_channel(self.r, factor),
            g: shade_channel(self.g, factor),
            b: shade_channel(self.b, factor),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
///
/// Three-digit shorthand, named colors and functional notations such as
/// `rgb(...)` are rejected with `None`.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Validate and normalize a color for the admin customization API.
///
/// The backend accepts only `#RRGGBB` (leading `#` required) and stores
/// colors lowercase.
pub fn normalize_hex_color(input: &str) -> Option<String> {
    if !input.starts_with('#') {
        return None;
    }
    parse_hex(input).map(Rgb::to_hex)
}

/// Shade a single channel. See the module docs for the formula.
pub fn shade_channel(channel: u8, factor: f64) -> u8 {
    let c = f64::from(channel);
    let out = if factor > 0.0 {
        (c + (255.0 - c) * factor).round()
    } else if factor < 0.0 {
        (c * (1.0 + factor)).round()
    } else {
        return channel;
    };
    out.clamp(0.0, 255.0) as u8
}

/// One shade level of a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub level: u16,
    pub color: Rgb,
}

/// Derive all ten shades for `base`, ordered `50..=900`.
pub fn shade_ramp(base: Rgb) -> Vec<Shade> {
    SHADE_LEVELS
        .iter()
        .map(|&(level, factor)| Shade {
            level,
            color: base.shade(factor),
        })
        .collect()
}
