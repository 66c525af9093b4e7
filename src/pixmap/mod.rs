//! The in-memory pixel grid and its codec boundary.
//!
//! `Pixmap` is a plain row-major grid of 8-bit RGBA pixels, independent of any
//! codec library. Decoding and encoding live in the `load`/`save` submodules,
//! which are the only places the `image` crate crosses this boundary.

mod load;
mod save;

pub use load::load_pixmap;
pub use save::save_pixmap;

pub(crate) use load::from_rgba_image;
pub(crate) use save::to_rgba_image;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A single pixel: four 8-bit channels in R, G, B, A order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the value background pixels are knocked out to.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque pixel of the given color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Whether the pixel contributes anything visible (alpha above zero).
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.a > 0
    }
}

/// An opaque color triple: three 8-bit channels, no alpha.
///
/// Used for tint colors and derived accents; it overwrites a pixel's color
/// channels but never its alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Formats as lowercase `#rrggbb`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `RRGGBB` with an optional leading `#`, case-insensitive.
impl FromStr for Rgb {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let hex = value.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid_color(value));
        }

        let parse_pair = |index: usize| {
            u8::from_str_radix(&hex[index..index + 2], 16).map_err(|_| invalid_color(value))
        };

        Ok(Self {
            r: parse_pair(0)?,
            g: parse_pair(2)?,
            b: parse_pair(4)?,
        })
    }
}

fn invalid_color(value: &str) -> Error {
    Error::InvalidParameter {
        name: "color".to_string(),
        reason: format!("expected #RRGGBB, got {value:?}"),
    }
}

/// An owned, row-major grid of RGBA pixels.
///
/// Invariant: `pixels.len() == width * height`, with pixel `(x, y)` stored at
/// index `y * width + x`. Dimensions are fixed for the lifetime of the value;
/// the transforms in [`crate::ops`] produce new pixmaps rather than mutating
/// their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Pixmap {
    /// Create a fully transparent pixmap of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a pixmap filled with a single pixel value.
    #[must_use]
    pub fn filled(width: u32, height: u32, fill: Rgba) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    /// Build a pixmap by evaluating a function at each `(x, y)` coordinate,
    /// row by row.
    #[must_use]
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a pixmap from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length does not match the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::InvalidParameter {
                name: "pixels".to_string(),
                reason: format!(
                    "expected {expected} pixels for {width}x{height}, got {}",
                    pixels.len()
                ),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the pixmap contains no pixels (either dimension is zero).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn put(&mut self, x: u32, y: u32, pixel: Rgba) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        let index = self.index(x, y);
        self.pixels[index] = pixel;
    }

    /// The underlying row-major pixel buffer.
    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Apply a per-pixel transform, producing a new pixmap with the same
    /// dimensions.
    ///
    /// Each output pixel depends only on the corresponding input pixel, so
    /// every transform built on `map` is a deterministic single pass.
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Rgba) -> Rgba,
    {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
