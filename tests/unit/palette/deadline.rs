use super::*;
use image::{Rgba, RgbaImage};

fn noisy_image(side: u32) -> RgbaImage {
    RgbaImage::from_fn(side, side, |x, y| {
        Rgba([x as u8, y as u8, (x * 7 + y * 13) as u8, 255])
    })
}

#[test]
fn generous_budget_matches_the_direct_call() {
    let img = noisy_image(32);
    let direct = optimize_palette(&img, 16);
    match optimize_palette_with_timeout(&img, 16, Duration::from_secs(60)) {
        OptimizeOutcome::Optimized(out) => assert_eq!(out.as_raw(), direct.as_raw()),
        OptimizeOutcome::TimedOut => panic!("optimization should finish within a minute"),
    }
}

#[test]
fn zero_budget_times_out() {
    let img = noisy_image(256);
    assert!(matches!(
        optimize_palette_with_timeout(&img, 32, Duration::ZERO),
        OptimizeOutcome::TimedOut
    ));
}
