//! # `iconkit`
//!
//! A library for icon post-processing: chroma-threshold background knockout,
//! alpha-preserving flat tinting, dominant-color extraction, and circular
//! badge rendering.
//!
//! The transforms are single-pass, pure, and deterministic; file decoding and
//! encoding are confined to the [`pixmap`] module's load/save boundary.
//!
//! ## Example
//!
//! ```no_run
//! use iconkit::{load_pixmap, save_pixmap};
//! use iconkit::ops::make_transparent;
//!
//! # fn main() -> iconkit::Result<()> {
//! let icon = load_pixmap("icon.png")?;
//! let cutout = make_transparent(&icon, 30);
//! save_pixmap(&cutout, "output.png")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod ops;
pub mod pixmap;
pub mod theme;

pub use error::{Error, Result};
pub use pixmap::{load_pixmap, save_pixmap, Pixmap, Rgb, Rgba};
