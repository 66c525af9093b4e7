//! Background removal by chroma threshold.

use crate::pixmap::{Pixmap, Rgba};

/// Knock near-black background pixels out of an image.
///
/// A pixel counts as background when all three color channels sit at or
/// below `tolerance`; it is replaced with fully transparent black, whatever
/// its existing alpha was. Every other pixel passes through unchanged.
///
/// The comparison is against raw 8-bit channel values: tolerance 0 matches
/// only pure black, 255 blanks the whole image, and raising the tolerance
/// can only grow the set of knocked-out pixels. Hue and saturation are never
/// examined.
#[must_use]
pub fn make_transparent(src: &Pixmap, tolerance: u8) -> Pixmap {
    src.map(|px| {
        if px.r <= tolerance && px.g <= tolerance && px.b <= tolerance {
            Rgba::TRANSPARENT
        } else {
            px
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pixels: Vec<Rgba>) -> Pixmap {
        let width = pixels.len() as u32;
        Pixmap::from_pixels(width, 1, pixels).unwrap()
    }

    #[test]
    fn test_dark_pixel_knocked_out_light_pixel_kept() {
        let src = row(vec![Rgba::opaque(0, 0, 0), Rgba::opaque(200, 200, 200)]);
        let out = make_transparent(&src, 30);
        assert_eq!(
            out.pixels(),
            &[Rgba::TRANSPARENT, Rgba::opaque(200, 200, 200)]
        );
    }

    #[test]
    fn test_tolerance_below_channels_leaves_pixel_alone() {
        let src = row(vec![Rgba::new(10, 10, 10, 128)]);
        let out = make_transparent(&src, 5);
        assert_eq!(out.pixels(), src.pixels());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let src = row(vec![Rgba::opaque(30, 30, 30), Rgba::opaque(31, 30, 30)]);
        let out = make_transparent(&src, 30);
        assert_eq!(out.pixels(), &[Rgba::TRANSPARENT, Rgba::opaque(31, 30, 30)]);
    }

    #[test]
    fn test_one_bright_channel_keeps_the_pixel() {
        let src = row(vec![Rgba::opaque(0, 0, 200)]);
        let out = make_transparent(&src, 30);
        assert_eq!(out.pixels(), src.pixels());
    }

    #[test]
    fn test_semi_transparent_dark_pixel_is_zeroed_like_any_other() {
        let src = row(vec![Rgba::new(10, 10, 10, 128)]);
        let out = make_transparent(&src, 30);
        assert_eq!(out.pixels(), &[Rgba::TRANSPARENT]);
    }

    #[test]
    fn test_zero_tolerance_blanks_a_black_image() {
        let src = Pixmap::filled(4, 4, Rgba::opaque(0, 0, 0));
        let out = make_transparent(&src, 0);
        assert!(out.pixels().iter().all(|px| *px == Rgba::TRANSPARENT));
    }

    #[test]
    fn test_raising_tolerance_never_shrinks_the_knockout() {
        let src = row(vec![
            Rgba::opaque(0, 0, 0),
            Rgba::new(20, 20, 20, 40),
            Rgba::opaque(60, 60, 60),
            Rgba::opaque(61, 200, 14),
            Rgba::opaque(255, 255, 255),
        ]);

        for (low, high) in [(0u8, 10u8), (10, 30), (30, 61), (61, 255)] {
            let low_out = make_transparent(&src, low);
            let high_out = make_transparent(&src, high);
            for (l, h) in low_out.pixels().iter().zip(high_out.pixels()) {
                if *l == Rgba::TRANSPARENT {
                    assert_eq!(*h, Rgba::TRANSPARENT, "tolerance {high} undid tolerance {low}");
                }
            }
        }
    }
}
