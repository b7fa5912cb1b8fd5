use super::*;
use image::{Rgba, RgbaImage};

fn two_entry_palette() -> Palette {
    Palette {
        entries: vec![[0, 0, 0, 255], [255, 255, 255, 255]],
    }
}

#[test]
fn pixels_map_to_the_nearest_entry() {
    let img = RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            Rgba([10, 10, 10, 255])
        } else {
            Rgba([200, 200, 200, 255])
        }
    });
    let out = apply_palette(&img, &two_entry_palette());
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(out.get_pixel(1, 0).0, [255, 255, 255, 255]);
}

#[test]
fn alpha_is_ignored_for_matching_but_written_from_the_entry() {
    let palette = Palette {
        entries: vec![[250, 0, 0, 10]],
    };
    let img = RgbaImage::from_pixel(2, 2, Rgba([240, 5, 5, 255]));
    let out = apply_palette(&img, &palette);
    assert_eq!(out.get_pixel(0, 0).0, [250, 0, 0, 10]);
}

#[test]
fn empty_palette_leaves_the_image_unchanged() {
    let img = RgbaImage::from_pixel(3, 3, Rgba([7, 8, 9, 255]));
    let out = apply_palette(&img, &Palette { entries: vec![] });
    assert_eq!(out.as_raw(), img.as_raw());
}

#[test]
fn optimize_within_budget_is_a_noop() {
    let mut img = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
    img.put_pixel(0, 0, Rgba([4, 5, 6, 255]));
    let out = optimize_palette(&img, 8);
    assert_eq!(out.as_raw(), img.as_raw());
}

#[test]
fn optimize_bounds_the_unique_color_count() {
    let img = RgbaImage::from_fn(32, 32, |x, y| {
        Rgba([(x * 8) as u8, (y * 8) as u8, (x + y) as u8, 255])
    });
    assert!(unique_color_count(&img) > 16);
    let out = optimize_palette(&img, 16);
    assert!(unique_color_count(&out) <= 16);
    assert_eq!(out.dimensions(), img.dimensions());
}

#[test]
fn optimize_is_idempotent() {
    let img = RgbaImage::from_fn(32, 32, |x, y| {
        Rgba([(x * 8) as u8, (y * 8) as u8, (x * y) as u8, 255])
    });
    let once = optimize_palette(&img, 16);
    let twice = optimize_palette(&once, 16);
    assert_eq!(once.as_raw(), twice.as_raw());
}
