//! Image decoding into pixmaps.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};

use super::{Pixmap, Rgba};

/// Decode an image file into a pixmap.
///
/// Any format the codec understands (PNG, JPEG, BMP, GIF, TIFF, ...) is
/// accepted; whatever the source channel layout, pixels are converted to
/// 8-bit RGBA.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not a decodable
/// image.
pub fn load_pixmap<P: AsRef<Path>>(path: P) -> Result<Pixmap> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let pixmap = from_rgba_image(&img.to_rgba8());
    tracing::debug!(
        "decoded {} ({}x{})",
        path.display(),
        pixmap.width(),
        pixmap.height()
    );

    Ok(pixmap)
}

/// Convert a decoded RGBA buffer into a pixmap.
pub(crate) fn from_rgba_image(img: &RgbaImage) -> Pixmap {
    let pixels = img
        .pixels()
        .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
        .collect();

    // The codec buffer is exactly width * height pixels, so the length
    // invariant holds without a checked constructor.
    Pixmap {
        width: img.width(),
        height: img.height(),
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_image_preserves_pixels() {
        let img = RgbaImage::from_fn(2, 2, |x, y| {
            image::Rgba([x as u8, y as u8, 7, if x == y { 255 } else { 0 }])
        });

        let pixmap = from_rgba_image(&img);
        assert_eq!(pixmap.dimensions(), (2, 2));
        assert_eq!(pixmap.get(1, 0), Some(Rgba::new(1, 0, 7, 0)));
        assert_eq!(pixmap.get(1, 1), Some(Rgba::new(1, 1, 7, 255)));
    }

    #[test]
    fn test_load_missing_file_is_decode_error() {
        let result = load_pixmap("/nonexistent/iconkit_missing.png");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }
}
