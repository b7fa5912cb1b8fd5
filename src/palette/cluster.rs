//! Bounded palette discovery via sampled k-means over RGBA pixels.
//!
//! Clustering never fails out to the caller: any degenerate condition falls
//! back to deterministic color sampling, so a palette is always produced.

use std::collections::BTreeSet;

use image::RgbaImage;
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Pixel-sampling cap per image for clustering.
const MAX_CLUSTER_SAMPLES: usize = 10_000;
/// Pixel-sampling cap per image for the fallback path.
const MAX_FALLBACK_SAMPLES: usize = 5_000;
const MAX_ITERATIONS: usize = 50;
const CONVERGENCE_TOLERANCE: f32 = 1e-3;
/// Fixed seed so repeated runs pick the same samples and centroids.
const SAMPLE_SEED: u64 = 42;

/// An ordered set of representative colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette entries as straight RGBA8.
    pub entries: Vec<[u8; 4]>,
}

impl Palette {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Discover a palette of at most `k` colors across `images`.
///
/// When the images already use `k` or fewer unique colors they are returned
/// verbatim (sorted, no clustering). Otherwise k-means runs over a seeded
/// pixel sample; degenerate runs fall back to deterministic sampling.
/// `k` is clamped to at least 1.
#[tracing::instrument(skip(images))]
pub fn build_palette(images: &[&RgbaImage], k: usize) -> Palette {
    let k = k.max(1);

    let mut unique = BTreeSet::new();
    for image in images {
        for px in image.pixels() {
            unique.insert(px.0);
            if unique.len() > k {
                break;
            }
        }
        if unique.len() > k {
            break;
        }
    }
    if unique.is_empty() {
        return Palette {
            entries: vec![[0, 0, 0, 255]],
        };
    }
    if unique.len() <= k {
        tracing::debug!(colors = unique.len(), k, "color set already within budget");
        return Palette {
            entries: unique.into_iter().collect(),
        };
    }

    match kmeans_palette(images, k) {
        Some(entries) => Palette { entries },
        None => {
            tracing::debug!(k, "k-means degenerate, using deterministic sampling fallback");
            fallback_palette(images, k)
        }
    }
}

/// Uniform seeded sample of up to `cap` pixels from `image`.
fn sample_pixels(image: &RgbaImage, cap: usize) -> Vec<[u8; 4]> {
    let total = image.pixels().len();
    if total <= cap {
        return image.pixels().map(|p| p.0).collect();
    }
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let flat = image.as_raw();
    rand::seq::index::sample(&mut rng, total, cap)
        .into_iter()
        .map(|i| {
            let o = i * 4;
            [flat[o], flat[o + 1], flat[o + 2], flat[o + 3]]
        })
        .collect()
}

/// Bounded k-means in 4-channel f32 space. `None` signals a degenerate run
/// (fewer samples than clusters, or a non-finite centroid).
fn kmeans_palette(images: &[&RgbaImage], k: usize) -> Option<Vec<[u8; 4]>> {
    let mut samples: Vec<[f32; 4]> = Vec::new();
    for image in images {
        samples.extend(
            sample_pixels(image, MAX_CLUSTER_SAMPLES)
                .into_iter()
                .map(|px| px.map(f32::from)),
        );
    }
    if samples.len() < k {
        return None;
    }

    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let mut centroids: Vec<[f32; 4]> = rand::seq::index::sample(&mut rng, samples.len(), k)
        .into_iter()
        .map(|i| samples[i])
        .collect();

    for _ in 0..MAX_ITERATIONS {
        let assignments: Vec<usize> = samples
            .par_iter()
            .map(|px| nearest_centroid(px, &centroids))
            .collect();

        let mut sums = vec![[0.0f64; 4]; k];
        let mut counts = vec![0usize; k];
        for (px, &c) in samples.iter().zip(&assignments) {
            for ch in 0..4 {
                sums[c][ch] += f64::from(px[ch]);
            }
            counts[c] += 1;
        }

        let mut movement = 0.0f32;
        for (i, centroid) in centroids.iter_mut().enumerate() {
            // A centroid with zero assignments keeps its previous position.
            if counts[i] == 0 {
                continue;
            }
            let mut next = [0.0f32; 4];
            for ch in 0..4 {
                next[ch] = (sums[i][ch] / counts[i] as f64) as f32;
                movement = movement.max((next[ch] - centroid[ch]).abs());
            }
            *centroid = next;
        }
        if movement < CONVERGENCE_TOLERANCE {
            break;
        }
    }

    if centroids.iter().flatten().any(|v| !v.is_finite()) {
        return None;
    }
    Some(
        centroids
            .iter()
            .map(|c| c.map(|v| v.round().clamp(0.0, 255.0) as u8))
            .collect(),
    )
}

fn nearest_centroid(px: &[f32; 4], centroids: &[[f32; 4]]) -> usize {
    let mut best = 0;
    let mut best_d = f32::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let mut d = 0.0;
        for ch in 0..4 {
            let diff = px[ch] - c[ch];
            d += diff * diff;
        }
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

/// Deterministic sampling fallback: capped unique colors in sorted order,
/// strided down to exactly `k` entries when over.
fn fallback_palette(images: &[&RgbaImage], k: usize) -> Palette {
    let mut colors = BTreeSet::new();
    for image in images {
        for px in sample_pixels(image, MAX_FALLBACK_SAMPLES) {
            colors.insert(px);
        }
    }
    if colors.is_empty() {
        return Palette {
            entries: vec![[0, 0, 0, 255]],
        };
    }
    let colors: Vec<[u8; 4]> = colors.into_iter().collect();
    if colors.len() <= k {
        return Palette { entries: colors };
    }
    let step = colors.len() / k;
    Palette {
        entries: (0..k).map(|i| colors[i * step]).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/cluster.rs"]
mod tests;
