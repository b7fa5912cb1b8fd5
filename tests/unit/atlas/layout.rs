use super::*;

#[test]
fn layout_partitions_exactly_at_boundaries() {
    let expect = |n: usize, cols: u32, cell: u32| {
        let layout = grid_layout_for(n);
        assert_eq!((layout.cols, layout.rows, layout.cell_size), (cols, cols, cell), "n={n}");
    };
    expect(1, 2, 512);
    expect(4, 2, 512);
    expect(5, 4, 256);
    expect(16, 4, 256);
    expect(17, 8, 128);
    expect(64, 8, 128);
}

#[test]
fn cells_always_tile_the_full_atlas() {
    for n in 1..=64 {
        let layout = grid_layout_for(n);
        assert_eq!(layout.cols * layout.cell_size, ATLAS_SIZE);
        assert_eq!(layout.rows * layout.cell_size, ATLAS_SIZE);
    }
}

#[test]
fn info_counts_used_and_unused_cells() {
    let info = atlas_info_for(5);
    assert_eq!(info.layout_name, "4x4");
    assert_eq!(info.cell_size, 256);
    assert_eq!(info.atlas_size, 1024);
    assert_eq!(info.total_cells, 16);
    assert_eq!(info.used_cells, 5);
    assert_eq!(info.unused_cells, 11);
}

#[test]
fn frame_count_bounds() {
    assert!(!validate_frame_count(0));
    assert!(validate_frame_count(1));
    assert!(validate_frame_count(64));
    assert!(!validate_frame_count(65));
}

#[test]
fn fps_bounds() {
    assert!(!validate_fps(0));
    assert!(validate_fps(1));
    assert!(validate_fps(60));
    assert!(!validate_fps(61));
}
