use image::RgbaImage;

use crate::foundation::error::{SpritelyError, SpritelyResult};

/// One animation frame: straight RGBA8 pixels plus a display duration.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Row-major RGBA8 pixel buffer.
    pub image: RgbaImage,
    /// Display duration in milliseconds (always >= 1).
    pub duration_ms: u32,
}

impl Frame {
    /// Build a frame, clamping a zero duration up to 1 ms.
    pub fn new(image: RgbaImage, duration_ms: u32) -> Self {
        Self {
            image,
            duration_ms: duration_ms.max(1),
        }
    }
}

/// An ordered sequence of decoded frames, immutable after decode.
///
/// Reduction and atlas building produce new values and never mutate a
/// sequence in place.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    /// Frames in temporal order.
    pub frames: Vec<Frame>,
    /// Loop count of the source animation (0 = infinite).
    pub loop_count: u16,
    /// Canvas width shared by all frames.
    pub width: u32,
    /// Canvas height shared by all frames.
    pub height: u32,
}

impl FrameSequence {
    /// Build a sequence from decoded frames, taking the shared dimensions
    /// from the first frame. Fails on an empty frame list.
    pub fn new(frames: Vec<Frame>, loop_count: u16) -> SpritelyResult<Self> {
        let first = frames
            .first()
            .ok_or_else(|| SpritelyError::decode("no frames in sequence"))?;
        let (width, height) = first.image.dimensions();
        Ok(Self {
            frames,
            loop_count,
            width,
            height,
        })
    }

    /// Number of frames in the sequence.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Per-frame display durations in milliseconds.
    pub fn durations_ms(&self) -> Vec<u32> {
        self.frames.iter().map(|f| f.duration_ms).collect()
    }

    /// Mean display duration across all frames, in milliseconds.
    pub fn average_duration_ms(&self) -> f64 {
        if self.frames.is_empty() {
            return 0.0;
        }
        let total: u64 = self.frames.iter().map(|f| u64::from(f.duration_ms)).sum();
        total as f64 / self.frames.len() as f64
    }

    /// Serializable summary of this sequence.
    pub fn info(&self) -> SequenceInfo {
        SequenceInfo {
            total_frames: self.len(),
            width: self.width,
            height: self.height,
            loop_count: self.loop_count,
            average_duration_ms: self.average_duration_ms(),
            durations_ms: self.durations_ms(),
        }
    }
}

/// Reporting view over a decoded sequence.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SequenceInfo {
    /// Number of frames in the sequence.
    pub total_frames: usize,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Loop count of the source animation (0 = infinite).
    pub loop_count: u16,
    /// Mean display duration in milliseconds.
    pub average_duration_ms: f64,
    /// Per-frame display durations in milliseconds.
    pub durations_ms: Vec<u32>,
}

#[cfg(test)]
#[path = "../../tests/unit/frames/sequence.rs"]
mod tests;
