//! Frame-count reduction strategies and the remove-every thinning pre-filter.
//!
//! All functions here are pure: they clone selected frames out of the input
//! slice and never mutate or reorder it.

use std::str::FromStr;

use crate::{
    atlas::layout::MAX_ATLAS_FRAMES,
    foundation::error::SpritelyError,
    frames::sequence::Frame,
};

/// Closed set of frame-selection policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReduceStrategy {
    /// Evenly spaced indices across the whole sequence.
    Uniform,
    /// Always keeps the first and last frame, spacing the rest evenly.
    KeepEnds,
    /// Alias of [`ReduceStrategy::KeepEnds`]; reserved for future
    /// difference-based key-frame selection.
    Smart,
    /// Takes every n-th frame; may return fewer than the target count.
    EveryNth,
}

impl ReduceStrategy {
    /// Canonical lowercase name, matching [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::KeepEnds => "keep_ends",
            Self::Smart => "smart",
            Self::EveryNth => "every_nth",
        }
    }
}

impl FromStr for ReduceStrategy {
    type Err = SpritelyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Self::Uniform),
            "keep_ends" => Ok(Self::KeepEnds),
            "smart" => Ok(Self::Smart),
            "every_nth" => Ok(Self::EveryNth),
            other => Err(SpritelyError::validation(format!(
                "unknown reduction strategy '{other}'"
            ))),
        }
    }
}

/// Select a subsequence of `frames` of at most `target_count` frames.
///
/// Returns a full copy unchanged when the input is already within the target,
/// and an empty vec for a zero target.
/// `nth` overrides the computed step for [`ReduceStrategy::EveryNth`] and is
/// ignored by the other strategies. Every strategy preserves temporal order.
pub fn reduce_frames(
    frames: &[Frame],
    target_count: usize,
    strategy: ReduceStrategy,
    nth: Option<usize>,
) -> Vec<Frame> {
    if target_count == 0 {
        return Vec::new();
    }
    if frames.len() <= target_count {
        return frames.to_vec();
    }
    match strategy {
        ReduceStrategy::Uniform => reduce_uniform(frames, target_count),
        ReduceStrategy::KeepEnds | ReduceStrategy::Smart => reduce_keep_ends(frames, target_count),
        ReduceStrategy::EveryNth => reduce_every_nth(frames, target_count, nth),
    }
}

fn reduce_uniform(frames: &[Frame], target_count: usize) -> Vec<Frame> {
    let step = frames.len() as f64 / target_count as f64;
    (0..target_count)
        .map(|i| (i as f64 * step) as usize)
        .filter(|&idx| idx < frames.len())
        .map(|idx| frames[idx].clone())
        .collect()
}

fn reduce_keep_ends(frames: &[Frame], target_count: usize) -> Vec<Frame> {
    if target_count < 2 {
        return frames[..target_count].to_vec();
    }

    let mut kept = vec![frames[0].clone()];
    let interior = target_count - 2;
    if interior > 0 {
        let step = (frames.len() - 2) as f64 / interior as f64;
        for i in 1..=interior {
            let idx = (i as f64 * step) as usize;
            // The last frame is appended separately below.
            if idx < frames.len() - 1 {
                kept.push(frames[idx].clone());
            }
        }
    }
    kept.push(frames[frames.len() - 1].clone());
    kept
}

fn reduce_every_nth(frames: &[Frame], target_count: usize, nth: Option<usize>) -> Vec<Frame> {
    let n = nth.unwrap_or(frames.len() / target_count).max(1);
    frames
        .iter()
        .step_by(n)
        .take(target_count)
        .cloned()
        .collect()
}

/// Thin a sequence by a fixed ratio: keep `keep_r` frames, drop one,
/// repeating. `keep_r == 0` is a no-op copy.
///
/// Intended as a pre-filter before [`reduce_frames`] when a caller wants an
/// explicit skip pattern in addition to an exact target count.
pub fn remove_every(frames: &[Frame], keep_r: usize) -> Vec<Frame> {
    if keep_r == 0 {
        return frames.to_vec();
    }
    let window = keep_r + 1;
    frames
        .iter()
        .enumerate()
        .filter(|(pos, _)| pos % window != keep_r)
        .map(|(_, f)| f.clone())
        .collect()
}

/// One way of bringing an over-long sequence under the atlas frame ceiling.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ReductionSuggestion {
    /// Strategy to pass to [`reduce_frames`].
    pub strategy: ReduceStrategy,
    /// Explicit every-nth factor, when the strategy uses one.
    pub factor: Option<usize>,
    /// Frame count the suggestion would produce.
    pub reduced_frames: usize,
    /// Human-readable description of the suggestion.
    pub description: String,
}

/// Enumerate reductions that bring `frame_count` within the 64-frame ceiling,
/// sorted by resulting frame count descending. Empty when already within it.
pub fn reduction_suggestions(frame_count: usize) -> Vec<ReductionSuggestion> {
    let mut out = Vec::new();
    if frame_count <= MAX_ATLAS_FRAMES {
        return out;
    }

    for factor in [2usize, 3, 4, 5, 6, 8, 10] {
        let reduced = frame_count / factor;
        if reduced > 0 && reduced <= MAX_ATLAS_FRAMES {
            out.push(ReductionSuggestion {
                strategy: ReduceStrategy::EveryNth,
                factor: Some(factor),
                reduced_frames: reduced,
                description: format!("Take every {factor}th frame"),
            });
        }
    }
    for target in [4usize, 16, 64] {
        if frame_count > target {
            out.push(ReductionSuggestion {
                strategy: ReduceStrategy::KeepEnds,
                factor: None,
                reduced_frames: target,
                description: format!("Reduce to {target} frames (keep first/last)"),
            });
        }
    }

    out.sort_by(|a, b| b.reduced_frames.cmp(&a.reduced_frames));
    out
}

#[cfg(test)]
#[path = "../tests/unit/reduce.rs"]
mod tests;
