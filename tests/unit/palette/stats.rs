use super::*;
use image::{Rgba, RgbaImage};

#[test]
fn analysis_ranks_most_common_colors() {
    let img = RgbaImage::from_fn(2, 2, |x, y| {
        if x == 0 && y == 0 {
            Rgba([0, 0, 255, 255])
        } else {
            Rgba([255, 0, 0, 255])
        }
    });
    let analysis = color_analysis(&img);
    assert_eq!(analysis.unique_colors, 2);
    assert_eq!(analysis.total_pixels, 4);
    assert_eq!(analysis.most_common[0].color, [255, 0, 0, 255]);
    assert_eq!(analysis.most_common[0].count, 3);
    assert!((analysis.most_common[0].percentage - 75.0).abs() < 1e-9);
}

#[test]
fn compare_reports_color_and_size_reduction() {
    // 300 unique colors in the original, one in the optimized stand-in.
    let original = RgbaImage::from_fn(20, 15, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    let optimized = RgbaImage::from_pixel(20, 15, Rgba([0, 0, 0, 255]));

    let stats = compare(&original, &optimized);
    assert_eq!(stats.original_colors, 300);
    assert_eq!(stats.optimized_colors, 1);
    assert_eq!(stats.color_reduction, 299);
    // 24-bit truecolor down to 8-bit indexed.
    assert!((stats.size_reduction_percent - 100.0 * 16.0 / 24.0).abs() < 1e-9);
}

#[test]
fn compare_is_zero_when_nothing_changed() {
    let img = RgbaImage::from_pixel(4, 4, Rgba([5, 5, 5, 255]));
    let stats = compare(&img, &img);
    assert_eq!(stats.color_reduction, 0);
    assert_eq!(stats.size_reduction_percent, 0.0);
}
