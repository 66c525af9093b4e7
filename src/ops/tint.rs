//! Alpha-preserving flat recoloring.

use crate::pixmap::{Pixmap, Rgb, Rgba};

/// Recolor every visible pixel to a single flat color, keeping alpha.
///
/// Pixels with any opacity take `color` as their new channels while their
/// original alpha stays untouched, so anti-aliased edges keep their blend in
/// the new hue. Fully transparent pixels are left completely alone, stale
/// color channels included. Applying the same color twice changes nothing.
#[must_use]
pub fn apply_tint(src: &Pixmap, color: Rgb) -> Pixmap {
    src.map(|px| {
        if px.is_visible() {
            Rgba::new(color.r, color.g, color.b, px.a)
        } else {
            px
        }
    })
}
