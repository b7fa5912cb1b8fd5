use std::{fs::File, io::BufReader, path::Path};

use image::{AnimationDecoder, RgbaImage, codecs::gif::GifDecoder};

use crate::{
    foundation::error::{SpritelyError, SpritelyResult},
    frames::sequence::{Frame, FrameSequence},
};

/// Display duration used when a frame carries no delay metadata.
const DEFAULT_FRAME_MS: u32 = 100;

/// Decode an animated GIF into an ordered [`FrameSequence`].
///
/// Fails with [`SpritelyError::Decode`] when the file is missing, unreadable,
/// or contains zero frames. The decoder does not surface the netscape loop
/// extension, so the loop count is reported as 0 (infinite).
pub fn decode_gif(path: &Path) -> SpritelyResult<FrameSequence> {
    let file = File::open(path)
        .map_err(|e| SpritelyError::decode(format!("open '{}': {e}", path.display())))?;
    let decoder = GifDecoder::new(BufReader::new(file))
        .map_err(|e| SpritelyError::decode(format!("read gif header '{}': {e}", path.display())))?;
    let raw = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| SpritelyError::decode(format!("decode frames '{}': {e}", path.display())))?;
    if raw.is_empty() {
        return Err(SpritelyError::decode(format!(
            "no frames found in '{}'",
            path.display()
        )));
    }

    let frames = raw
        .into_iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            let ms = if numer == 0 || denom == 0 {
                DEFAULT_FRAME_MS
            } else {
                (f64::from(numer) / f64::from(denom)).round() as u32
            };
            Frame::new(frame.into_buffer(), ms)
        })
        .collect();

    FrameSequence::new(frames, 0)
}

/// Decode a static image (PNG, JPEG, ...) into an RGBA8 buffer.
pub fn decode_image(path: &Path) -> SpritelyResult<RgbaImage> {
    let img = image::open(path)
        .map_err(|e| SpritelyError::decode(format!("open image '{}': {e}", path.display())))?;
    Ok(img.to_rgba8())
}
