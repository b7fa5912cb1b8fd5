//! Output encoding: lossless PNG and a lossy JPEG preview.

use std::{fs::File, io::BufWriter, path::Path};

use image::{DynamicImage, RgbaImage, codecs::jpeg::JpegEncoder};

use crate::foundation::error::{SpritelyError, SpritelyResult};

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> SpritelyResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            SpritelyError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    Ok(())
}

/// Write `image` as a lossless, alpha-preserving PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> SpritelyResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        image.as_raw(),
        image.width(),
        image.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| SpritelyError::encode(format!("write png '{}': {e}", path.display())))?;
    Ok(())
}

/// Write `image` as a lossy JPEG preview.
///
/// JPEG has no alpha channel; the channel is dropped rather than matted
/// against a guessed background color.
pub fn save_preview_jpeg(image: &RgbaImage, path: &Path, quality: u8) -> SpritelyResult<()> {
    ensure_parent_dir(path)?;
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let file = File::create(path)
        .map_err(|e| SpritelyError::encode(format!("create '{}': {e}", path.display())))?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality);
    encoder
        .encode_image(&rgb)
        .map_err(|e| SpritelyError::encode(format!("write jpeg '{}': {e}", path.display())))?;
    Ok(())
}
