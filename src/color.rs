//! Color types and series palettes.
//!
//! Provides an RGBA color representation, `#rrggbb` parsing, and the
//! palette that assigns colors to series by index.

use crate::error::{Error, Result};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }

    /// Parse an opaque color from a `#rrggbb` hex string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a 7-character hex color.
    pub fn from_hex(s: &str) -> Result<Self> {
        if !s.starts_with('#') || s.len() != 7 {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let r = u8::from_str_radix(&s[1..3], 16).map_err(|_| Error::InvalidColor(s.to_string()))?;
        let g = u8::from_str_radix(&s[3..5], 16).map_err(|_| Error::InvalidColor(s.to_string()))?;
        let b = u8::from_str_radix(&s[5..7], 16).map_err(|_| Error::InvalidColor(s.to_string()))?;
        Ok(Self::rgb(r, g, b))
    }
}

/// An ordered list of colors cycled by series index.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Default for Palette {
    fn default() -> Self {
        // Blue, green, orange.
        Self::new(vec![
            Rgba::rgb(0x1e, 0x88, 0xe5),
            Rgba::rgb(0x43, 0xa0, 0x47),
            Rgba::rgb(0xfb, 0x8c, 0x00),
        ])
    }
}

impl Palette {
    /// Create a palette from an ordered color list.
    ///
    /// An empty list falls back to the default palette.
    #[must_use]
    pub fn new(colors: Vec<Rgba>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    /// Color for a series index, cycling when the index exceeds the
    /// palette length.
    #[must_use]
    pub fn color(&self, series_index: usize) -> Rgba {
        self.colors[series_index % self.colors.len()]
    }

    /// Number of distinct colors before cycling.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; construction falls back to the default palette.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
