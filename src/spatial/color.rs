//! Canonical four-channel color keys
//!
//! Every pixel entering the system is normalized to RGBA exactly once, at
//! ingestion time. Downstream code compares and hashes `Color` values directly.

use std::fmt;

/// Fully opaque alpha, used when the source carries no alpha channel
pub const OPAQUE: u8 = u8::MAX;

/// An RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color([u8; 4]);

impl Color {
    /// Create a color from explicit channel values
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self([red, green, blue, alpha])
    }

    /// Create an opaque color from red, green and blue channels
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue, OPAQUE])
    }

    /// Canonicalize a pixel with any number of channels
    ///
    /// Channels are taken in RGBA order. A missing alpha channel becomes 255,
    /// any other missing channel becomes 0. Channels past the fourth are ignored.
    pub fn from_channels(channels: &[u8]) -> Self {
        let channel = |index: usize, fallback: u8| channels.get(index).copied().unwrap_or(fallback);
        Self([
            channel(0, 0),
            channel(1, 0),
            channel(2, 0),
            channel(3, OPAQUE),
        ])
    }

    /// Pack the channels into a single integer as `R<<24 | G<<16 | B<<8 | A`
    pub const fn to_packed(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Inverse of [`Color::to_packed`]
    pub const fn from_packed(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    /// Raw channel values in RGBA order
    pub const fn channels(self) -> [u8; 4] {
        self.0
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.0[2]
    }

    /// Alpha channel
    pub const fn alpha(self) -> u8 {
        self.0[3]
    }
}

impl From<[u8; 4]> for Color {
    fn from(channels: [u8; 4]) -> Self {
        Self(channels)
    }
}

impl From<[u8; 3]> for Color {
    fn from(channels: [u8; 3]) -> Self {
        Self::from_channels(&channels)
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self(pixel.0)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        Self(color.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "({r}, {g}, {b}, {a})")
    }
}
