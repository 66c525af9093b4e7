//! Circular badge rendering for profile images.

use image::imageops::{self, FilterType};

use crate::error::{Error, Result};
use crate::pixmap::{from_rgba_image, to_rgba_image, Pixmap, Rgba};

/// Render a pixmap as a round badge of the given side length.
///
/// The source is scaled to cover a `size` x `size` square (aspect preserved,
/// overflow center-cropped) and then masked to a centered circle. Pixels
/// outside the circle become fully transparent; the one-pixel rim band gets
/// proportional alpha so the edge does not alias harshly.
///
/// # Errors
///
/// Returns [`Error::EmptyImage`] if the source has no pixels or `size` is
/// zero.
pub fn circle_badge(src: &Pixmap, size: u32) -> Result<Pixmap> {
    if src.is_empty() || size == 0 {
        return Err(Error::EmptyImage);
    }
    let covered = cover_crop(src, size);
    Ok(apply_circle_mask(&covered))
}

/// Scale the source so the shorter side matches `size`, then center-crop the
/// longer side down to `size`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cover_crop(src: &Pixmap, size: u32) -> Pixmap {
    let (width, height) = src.dimensions();
    if width == size && height == size {
        return src.clone();
    }

    let scale = f64::from(size) / f64::from(width.min(height));
    // Safe: scaled dimensions cover a u32 target and stay within u32 range.
    let scaled_w = ((f64::from(width) * scale).round() as u32).max(size);
    let scaled_h = ((f64::from(height) * scale).round() as u32).max(size);

    let scaled = imageops::resize(
        &to_rgba_image(src),
        scaled_w,
        scaled_h,
        FilterType::Triangle,
    );
    let x = scaled_w.saturating_sub(size) / 2;
    let y = scaled_h.saturating_sub(size) / 2;
    let cropped = imageops::crop_imm(&scaled, x, y, size, size).to_image();
    from_rgba_image(&cropped)
}

/// Mask a square pixmap to a centered circle with a soft one-pixel rim.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn apply_circle_mask(src: &Pixmap) -> Pixmap {
    let size = src.width();
    let radius = f64::from(size) / 2.0;

    Pixmap::from_fn(size, size, |x, y| {
        let px = src.pixels()[y as usize * size as usize + x as usize];
        let dx = f64::from(x) + 0.5 - radius;
        let dy = f64::from(y) + 0.5 - radius;
        let distance = (dx * dx + dy * dy).sqrt();
        // Full coverage inside the circle, linear falloff across the rim.
        let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        // Safe: alpha scaled by a coverage in [0, 1] stays within u8 range.
        let alpha = (f64::from(px.a) * coverage).round() as u8;
        if alpha == 0 {
            Rgba::TRANSPARENT
        } else {
            Rgba::new(px.r, px.g, px.b, alpha)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        let src = Pixmap::filled(4, 4, Rgba::opaque(10, 20, 30));
        assert!(matches!(circle_badge(&src, 0), Err(Error::EmptyImage)));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let src = Pixmap::new(0, 0);
        assert!(matches!(circle_badge(&src, 8), Err(Error::EmptyImage)));
    }

    #[test]
    fn test_center_keeps_color_and_corners_go_transparent() {
        let color = Rgba::opaque(100, 150, 200);
        let src = Pixmap::filled(8, 8, color);
        let badge = circle_badge(&src, 8).unwrap();

        assert_eq!(badge.dimensions(), (8, 8));
        assert_eq!(badge.get(3, 3), Some(color));
        assert_eq!(badge.get(4, 4), Some(color));
        for (x, y) in [(0, 0), (7, 0), (0, 7), (7, 7)] {
            assert_eq!(badge.get(x, y), Some(Rgba::TRANSPARENT));
        }
    }

    #[test]
    fn test_wide_source_is_covered_and_center_cropped() {
        let color = Rgba::opaque(40, 80, 120);
        let src = Pixmap::filled(20, 10, color);
        let badge = circle_badge(&src, 8).unwrap();

        assert_eq!(badge.dimensions(), (8, 8));
        assert_eq!(badge.get(4, 4), Some(color));
        assert_eq!(badge.get(0, 0), Some(Rgba::TRANSPARENT));
    }
}
