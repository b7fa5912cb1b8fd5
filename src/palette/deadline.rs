//! Wall-clock budget around palette optimization.
//!
//! Clustering has no internal cancellation point, so the budget is enforced
//! by running the call on a worker thread that can be abandoned: on timeout
//! the worker's eventual result is discarded and its cost accepted as sunk.

use std::{sync::mpsc, thread, time::Duration};

use image::RgbaImage;

use crate::palette::remap::optimize_palette;

/// Result of running palette optimization under a wall-clock budget.
#[derive(Debug)]
pub enum OptimizeOutcome {
    /// Optimization finished within the budget.
    Optimized(RgbaImage),
    /// The budget elapsed first; callers should proceed unoptimized.
    TimedOut,
}

/// Run [`optimize_palette`] with a time budget.
///
/// A timeout is an expected outcome, not an error: the caller keeps the
/// original image.
pub fn optimize_palette_with_timeout(
    image: &RgbaImage,
    target_colors: usize,
    timeout: Duration,
) -> OptimizeOutcome {
    let (tx, rx) = mpsc::channel();
    let image = image.clone();
    thread::spawn(move || {
        // The receiver may be gone after a timeout; ignore the send result.
        let _ = tx.send(optimize_palette(&image, target_colors));
    });

    match rx.recv_timeout(timeout) {
        Ok(optimized) => OptimizeOutcome::Optimized(optimized),
        Err(_) => {
            tracing::warn!(?timeout, "palette optimization exceeded budget");
            OptimizeOutcome::TimedOut
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/deadline.rs"]
mod tests;
