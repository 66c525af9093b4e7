//! Image encoding from pixmaps.

use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::{Error, Result};

use super::Pixmap;

/// Encode a pixmap to an image file, format chosen by extension.
///
/// PNG is the preferred output format since it retains the alpha channel.
/// A `jpg`/`jpeg` extension drops alpha before encoding (the codec cannot
/// carry it); any other extension the codec knows is passed through as-is.
///
/// # Errors
///
/// Returns an error if the path is unwritable or the extension names no
/// supported format.
pub fn save_pixmap<P: AsRef<Path>>(pixmap: &Pixmap, path: P) -> Result<()> {
    let path = path.as_ref();
    let img = DynamicImage::ImageRgba8(to_rgba_image(pixmap));

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_lowercase();

    let encoded = match extension.as_str() {
        "jpg" | "jpeg" => img.to_rgb8().save(path),
        _ => img.save(path),
    };

    encoded.map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "encoded {} ({}x{})",
        path.display(),
        pixmap.width(),
        pixmap.height()
    );

    Ok(())
}

/// Convert a pixmap into a codec-ready RGBA buffer.
pub(crate) fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut raw = Vec::with_capacity(pixmap.pixel_count() * 4);
    for px in pixmap.pixels() {
        raw.extend_from_slice(&[px.r, px.g, px.b, px.a]);
    }

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), raw)
        .expect("buffer length matches dimensions")
}

#[cfg(test)]
mod tests {
    use super::super::{load_pixmap, Rgba};
    use super::*;

    #[test]
    fn test_to_rgba_image_channel_order() {
        let pixmap = Pixmap::filled(1, 1, Rgba::new(1, 2, 3, 4));
        let img = to_rgba_image(&pixmap);
        assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3, 4]);
    }

    #[test]
    fn test_png_roundtrip_through_disk() {
        let mut pixmap = Pixmap::filled(2, 1, Rgba::opaque(200, 100, 50));
        pixmap.put(0, 0, Rgba::new(1, 2, 3, 128));

        let path =
            std::env::temp_dir().join(format!("iconkit_roundtrip_{}.png", std::process::id()));
        save_pixmap(&pixmap, &path).unwrap();
        let loaded = load_pixmap(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, pixmap);
    }

    #[test]
    fn test_unknown_extension_is_encode_error() {
        let pixmap = Pixmap::filled(1, 1, Rgba::TRANSPARENT);
        let path = std::env::temp_dir().join("iconkit_bad_ext.xyz");
        assert!(matches!(
            save_pixmap(&pixmap, &path),
            Err(Error::Encode { .. })
        ));
    }
}
