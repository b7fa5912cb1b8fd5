//! Read-only reporting views over images and optimization runs.

use std::collections::HashMap;

use image::RgbaImage;

use crate::palette::remap::unique_color_count;

/// Number of most-common entries reported by [`color_analysis`].
const TOP_COLORS: usize = 10;

/// Share of an image occupied by one color.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ColorShare {
    /// The RGBA color value.
    pub color: [u8; 4],
    /// Number of pixels holding this color.
    pub count: usize,
    /// Share of all pixels, in percent.
    pub percentage: f64,
}

/// Color-usage summary for one image.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ColorAnalysis {
    /// Number of unique RGBA values.
    pub unique_colors: usize,
    /// Total pixel count.
    pub total_pixels: usize,
    /// Most common colors, largest share first.
    pub most_common: Vec<ColorShare>,
}

/// Summarize color usage in `image`.
pub fn color_analysis(image: &RgbaImage) -> ColorAnalysis {
    let mut counts: HashMap<[u8; 4], usize> = HashMap::new();
    for px in image.pixels() {
        *counts.entry(px.0).or_default() += 1;
    }
    let total_pixels = image.pixels().len();

    let mut ranked: Vec<([u8; 4], usize)> = counts.iter().map(|(c, n)| (*c, *n)).collect();
    // Tie-break on the color value so the ranking is deterministic.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let most_common = ranked
        .into_iter()
        .take(TOP_COLORS)
        .map(|(color, count)| ColorShare {
            color,
            count,
            percentage: if total_pixels == 0 {
                0.0
            } else {
                count as f64 / total_pixels as f64 * 100.0
            },
        })
        .collect();

    ColorAnalysis {
        unique_colors: counts.len(),
        total_pixels,
        most_common,
    }
}

/// Before/after summary of one optimization run.
#[derive(Clone, Debug, serde::Serialize)]
pub struct OptimizationStats {
    /// Unique colors in the original image.
    pub original_colors: usize,
    /// Unique colors in the optimized image.
    pub optimized_colors: usize,
    /// Colors removed by the optimization.
    pub color_reduction: usize,
    /// Estimated file-size reduction, in percent.
    pub size_reduction_percent: f64,
}

/// Compare an image before and after palette optimization.
pub fn compare(original: &RgbaImage, optimized: &RgbaImage) -> OptimizationStats {
    let original_colors = unique_color_count(original);
    let optimized_colors = unique_color_count(optimized);

    // Rough bit-depth estimate: indexed color at 256 entries or below,
    // truecolor above.
    fn bits_for(colors: usize) -> f64 {
        if colors <= 256 { 8.0 } else { 24.0 }
    }
    let original_bits = bits_for(original_colors);
    let optimized_bits = bits_for(optimized_colors);

    OptimizationStats {
        original_colors,
        optimized_colors,
        color_reduction: original_colors.saturating_sub(optimized_colors),
        size_reduction_percent: (original_bits - optimized_bits) / original_bits * 100.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/stats.rs"]
mod tests;
