//! Spritely turns an animated GIF into a fixed-grid sprite sheet atlas.
//!
//! The pipeline is three independent, composable engines over decoded RGBA
//! frames:
//!
//! 1. **Reduce**: subsample a sequence of N frames down to a target count
//!    under a selection policy ([`reduce_frames`], [`remove_every`])
//! 2. **Build**: pack the frames row-major into a fixed 1024x1024 grid image,
//!    letterboxing each frame into its cell ([`build_atlas`])
//! 3. **Optimize** (optional): discover a bounded palette via sampled k-means
//!    and remap every pixel to its nearest entry ([`optimize_palette`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: sampling and clustering run from a fixed
//!   seed, so a given input always produces the same atlas.
//! - **No global state**: every operation takes immutable inputs and returns a
//!   fresh output, so independent conversions can run concurrently.
//! - **Graceful palette degradation**: clustering failures fall back to
//!   deterministic sampling and never surface to the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod atlas;
mod encode;
mod foundation;
mod frames;
mod palette;
mod reduce;

pub use atlas::builder::{build_atlas, letterbox};
pub use atlas::layout::{
    ATLAS_SIZE, AtlasInfo, GridLayout, MAX_ATLAS_FRAMES, atlas_info_for, grid_layout_for,
    validate_fps, validate_frame_count,
};
pub use encode::{ensure_parent_dir, save_png, save_preview_jpeg};
pub use foundation::error::{SpritelyError, SpritelyResult};
pub use frames::decode::{decode_gif, decode_image};
pub use frames::sequence::{Frame, FrameSequence, SequenceInfo};
pub use palette::cluster::{Palette, build_palette};
pub use palette::deadline::{OptimizeOutcome, optimize_palette_with_timeout};
pub use palette::remap::{apply_palette, optimize_palette, unique_color_count};
pub use palette::stats::{ColorAnalysis, ColorShare, OptimizationStats, color_analysis, compare};
pub use reduce::{
    ReduceStrategy, ReductionSuggestion, reduce_frames, reduction_suggestions, remove_every,
};
