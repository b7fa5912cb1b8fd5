use super::*;
use image::{Rgba, RgbaImage};

fn solid(w: u32, h: u32, ms: u32) -> Frame {
    Frame::new(RgbaImage::from_pixel(w, h, Rgba([1, 2, 3, 255])), ms)
}

#[test]
fn zero_duration_is_clamped_to_one_ms() {
    let frame = solid(2, 2, 0);
    assert_eq!(frame.duration_ms, 1);
}

#[test]
fn dimensions_come_from_first_frame() {
    let seq = FrameSequence::new(vec![solid(10, 20, 40), solid(10, 20, 60)], 0).unwrap();
    assert_eq!((seq.width, seq.height), (10, 20));
    assert_eq!(seq.len(), 2);
    assert!(!seq.is_empty());
}

#[test]
fn empty_sequence_is_a_decode_error() {
    let err = FrameSequence::new(vec![], 0).unwrap_err();
    assert!(matches!(err, SpritelyError::Decode(_)));
}

#[test]
fn info_reports_average_duration() {
    let seq = FrameSequence::new(vec![solid(4, 4, 40), solid(4, 4, 60)], 0).unwrap();
    let info = seq.info();
    assert_eq!(info.total_frames, 2);
    assert_eq!(info.durations_ms, vec![40, 60]);
    assert!((info.average_duration_ms - 50.0).abs() < f64::EPSILON);
    assert_eq!(info.loop_count, 0);
}
