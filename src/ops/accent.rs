//! Dominant color extraction.

use image::imageops::{self, FilterType};

use crate::error::{Error, Result};
use crate::pixmap::{to_rgba_image, Pixmap, Rgb};

/// Side length of the thumbnail the mean is computed over.
const SAMPLE_SIZE: u32 = 50;

/// Estimate the dominant color of a pixmap.
///
/// The pixmap is shrunk to a fixed 50x50 thumbnail with nearest-neighbor
/// sampling and the result is the per-channel integer mean of those 2500
/// samples, alpha ignored. Fully transparent pixels still contribute their
/// color channels. The estimate is crude by construction: a half black,
/// half white image averages to mid-gray rather than either extreme.
///
/// # Errors
///
/// Returns [`Error::EmptyImage`] if the pixmap has no pixels.
#[allow(clippy::cast_possible_truncation)]
pub fn dominant_color(src: &Pixmap) -> Result<Rgb> {
    if src.is_empty() {
        return Err(Error::EmptyImage);
    }

    let thumb = imageops::resize(
        &to_rgba_image(src),
        SAMPLE_SIZE,
        SAMPLE_SIZE,
        FilterType::Nearest,
    );

    let mut sum_r: u64 = 0;
    let mut sum_g: u64 = 0;
    let mut sum_b: u64 = 0;
    for px in thumb.pixels() {
        sum_r += u64::from(px.0[0]);
        sum_g += u64::from(px.0[1]);
        sum_b += u64::from(px.0[2]);
    }

    let count = u64::from(SAMPLE_SIZE) * u64::from(SAMPLE_SIZE);
    // Safe: a floor mean of u8 samples cannot exceed 255.
    Ok(Rgb::new(
        (sum_r / count) as u8,
        (sum_g / count) as u8,
        (sum_b / count) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::Rgba;

    #[test]
    fn test_uniform_image_returns_its_color() {
        let src = Pixmap::filled(2, 2, Rgba::new(100, 150, 200, 255));
        assert_eq!(dominant_color(&src).unwrap(), Rgb::new(100, 150, 200));
    }

    #[test]
    fn test_half_black_half_white_averages_to_mid_gray() {
        let src = Pixmap::from_pixels(
            2,
            1,
            vec![Rgba::new(0, 0, 0, 255), Rgba::new(255, 255, 255, 255)],
        )
        .unwrap();
        // 25 black and 25 white thumbnail columns: floor(255 * 1250 / 2500).
        assert_eq!(dominant_color(&src).unwrap(), Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_empty_pixmap_is_rejected() {
        let src = Pixmap::new(0, 0);
        assert!(matches!(dominant_color(&src), Err(Error::EmptyImage)));
    }

    #[test]
    fn test_mean_stays_within_channel_extremes() {
        let src = Pixmap::from_pixels(
            3,
            1,
            vec![
                Rgba::new(10, 200, 50, 255),
                Rgba::new(20, 210, 60, 255),
                Rgba::new(30, 220, 70, 255),
            ],
        )
        .unwrap();
        let mean = dominant_color(&src).unwrap();
        assert!((10..=30).contains(&mean.r));
        assert!((200..=220).contains(&mean.g));
        assert!((50..=70).contains(&mean.b));
    }

    #[test]
    fn test_transparent_pixels_still_count() {
        let src = Pixmap::filled(4, 4, Rgba::new(200, 100, 50, 0));
        assert_eq!(dominant_color(&src).unwrap(), Rgb::new(200, 100, 50));
    }
}
