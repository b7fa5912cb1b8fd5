//! Nearest-entry pixel remapping and the single-image optimize entry point.

use std::collections::HashSet;

use image::RgbaImage;
use rayon::prelude::*;

use crate::palette::cluster::{Palette, build_palette};

/// Number of unique RGBA values in `image`.
pub fn unique_color_count(image: &RgbaImage) -> usize {
    let mut colors = HashSet::new();
    for px in image.pixels() {
        colors.insert(px.0);
    }
    colors.len()
}

/// Replace every pixel with its nearest palette entry.
///
/// Matching uses squared Euclidean distance over the RGB channels only
/// (alpha is ignored for matching); the winning entry's full RGBA value is
/// written. Operates on the raw buffer in parallel chunks. An empty palette
/// leaves the image unchanged.
pub fn apply_palette(image: &RgbaImage, palette: &Palette) -> RgbaImage {
    if palette.is_empty() {
        return image.clone();
    }
    let entries = &palette.entries;

    let mut out = image.clone();
    let buf: &mut [u8] = &mut out;
    buf.par_chunks_exact_mut(4).for_each(|px| {
        let entry = entries[nearest_entry_rgb(px, entries)];
        px.copy_from_slice(&entry);
    });
    out
}

fn nearest_entry_rgb(px: &[u8], entries: &[[u8; 4]]) -> usize {
    let mut best = 0;
    let mut best_d = i32::MAX;
    for (i, e) in entries.iter().enumerate() {
        let dr = i32::from(px[0]) - i32::from(e[0]);
        let dg = i32::from(px[1]) - i32::from(e[1]);
        let db = i32::from(px[2]) - i32::from(e[2]);
        let d = dr * dr + dg * dg + db * db;
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

/// Re-quantize `image` down to at most `target_colors` unique colors.
///
/// Returns the image unchanged when its color count is already within the
/// target, which also makes the operation idempotent. Dimensions and channel
/// depth never change.
#[tracing::instrument(skip(image))]
pub fn optimize_palette(image: &RgbaImage, target_colors: usize) -> RgbaImage {
    let unique = unique_color_count(image);
    if unique <= target_colors {
        tracing::debug!(unique, target_colors, "palette already within budget");
        return image.clone();
    }

    let palette = build_palette(&[image], target_colors);
    tracing::debug!(
        unique,
        entries = palette.len(),
        "remapping to clustered palette"
    );
    apply_palette(image, &palette)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/remap.rs"]
mod tests;
