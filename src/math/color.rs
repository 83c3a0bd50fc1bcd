#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with floating point components, nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Opaque white, the color substituted when a composite array carries none.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from RGBA components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parses an HTML hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// The leading `#` is optional. Returns `None` for anything else.
    ///
    /// ```
    /// use arraymesh::math::Color;
    ///
    /// assert_eq!(Color::from_html("#ffffff"), Some(Color::WHITE));
    /// assert_eq!(Color::from_html("#000"), Some(Color::BLACK));
    /// assert_eq!(Color::from_html("nope"), None);
    /// ```
    #[must_use]
    pub fn from_html(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            3 => {
                let mut channels = [0.0; 3];
                for (channel, c) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = c.to_digit(16)?;
                    *channel = nibble_to_unit(nibble);
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 | 8 => {
                let mut channels = [1.0; 4];
                for (i, channel) in channels.iter_mut().take(digits.len() / 2).enumerate() {
                    let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
                    *channel = f32::from(byte) / 255.0;
                }
                Some(Self::new(channels[0], channels[1], channels[2], channels[3]))
            }
            _ => None,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn nibble_to_unit(nibble: u32) -> f32 {
    (nibble * 17) as f32 / 255.0
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}
