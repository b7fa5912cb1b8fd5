use image::{RgbaImage, imageops};

use crate::{
    atlas::layout::{ATLAS_SIZE, grid_layout_for},
    foundation::error::{SpritelyError, SpritelyResult},
    frames::sequence::Frame,
};

/// Pack `frames` row-major into a fixed-size transparent atlas.
///
/// `frame_count` is clamped to the number of available frames; frames beyond
/// it are ignored and no frame is placed twice. Each placed frame is
/// letterboxed into its cell and composited through its own alpha channel.
/// The returned image is always [`ATLAS_SIZE`] square.
#[tracing::instrument(skip(frames))]
pub fn build_atlas(frames: &[Frame], frame_count: usize) -> SpritelyResult<RgbaImage> {
    if frames.is_empty() {
        return Err(SpritelyError::validation(
            "cannot build an atlas from zero frames",
        ));
    }

    let frame_count = frame_count.min(frames.len());
    let layout = grid_layout_for(frame_count);
    tracing::debug!(
        frame_count,
        cols = layout.cols,
        cell_size = layout.cell_size,
        "placing frames"
    );

    let mut sheet = RgbaImage::new(ATLAS_SIZE, ATLAS_SIZE);
    for (i, frame) in frames.iter().take(frame_count).enumerate() {
        let col = (i as u32) % layout.cols;
        let row = (i as u32) / layout.cols;
        let cell = letterbox(&frame.image, layout.cell_size, layout.cell_size);
        imageops::overlay(
            &mut sheet,
            &cell,
            i64::from(col * layout.cell_size),
            i64::from(row * layout.cell_size),
        );
    }
    Ok(sheet)
}

/// Fit `image` into a `width` x `height` transparent box.
///
/// Preserves aspect ratio, never upscales or crops, and centers the result
/// with integer offsets. Downscaling uses Lanczos3 resampling.
pub fn letterbox(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut out = RgbaImage::new(width, height);
    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 || width == 0 || height == 0 {
        return out;
    }

    let scale = (f64::from(width) / f64::from(src_w))
        .min(f64::from(height) / f64::from(src_h))
        .min(1.0);
    let new_w = ((f64::from(src_w) * scale) as u32).max(1);
    let new_h = ((f64::from(src_h) * scale) as u32).max(1);

    let scaled;
    let scaled_ref = if (new_w, new_h) == (src_w, src_h) {
        image
    } else {
        scaled = imageops::resize(image, new_w, new_h, imageops::FilterType::Lanczos3);
        &scaled
    };

    let dx = i64::from((width - new_w) / 2);
    let dy = i64::from((height - new_h) / 2);
    imageops::overlay(&mut out, scaled_ref, dx, dy);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/builder.rs"]
mod tests;
