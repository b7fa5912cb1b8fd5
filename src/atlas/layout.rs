//! Frame-count-to-grid lookup for the fixed-size atlas.

/// Edge length in pixels of every atlas, regardless of grid density.
pub const ATLAS_SIZE: u32 = 1024;

/// Hard ceiling on frames placed into one atlas (8x8 grid).
pub const MAX_ATLAS_FRAMES: usize = 64;

/// Grid shape chosen for a frame count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GridLayout {
    /// Cells per row.
    pub cols: u32,
    /// Cells per column.
    pub rows: u32,
    /// Edge length of one square cell, in pixels.
    pub cell_size: u32,
}

/// Pick the grid layout for `frame_count`.
///
/// Pure three-tier lookup: counts <= 4 use a 2x2 grid of 512-px cells,
/// <= 16 a 4x4 grid of 256-px cells, and everything above an 8x8 grid of
/// 128-px cells. Exactly one layout applies per count.
pub fn grid_layout_for(frame_count: usize) -> GridLayout {
    if frame_count <= 4 {
        GridLayout {
            cols: 2,
            rows: 2,
            cell_size: 512,
        }
    } else if frame_count <= 16 {
        GridLayout {
            cols: 4,
            rows: 4,
            cell_size: 256,
        }
    } else {
        GridLayout {
            cols: 8,
            rows: 8,
            cell_size: 128,
        }
    }
}

/// Serializable description of the sheet a frame count produces.
#[derive(Clone, Debug, serde::Serialize)]
pub struct AtlasInfo {
    /// Requested frame count.
    pub frame_count: usize,
    /// Atlas edge length in pixels.
    pub atlas_size: u32,
    /// Grid name such as `"4x4"`.
    pub layout_name: String,
    /// Cells per row.
    pub cols: u32,
    /// Cells per column.
    pub rows: u32,
    /// Edge length of one cell, in pixels.
    pub cell_size: u32,
    /// Total cells in the grid.
    pub total_cells: usize,
    /// Cells that will hold a frame.
    pub used_cells: usize,
    /// Trailing cells left fully transparent.
    pub unused_cells: usize,
}

/// Describe the atlas configuration chosen for `frame_count`.
pub fn atlas_info_for(frame_count: usize) -> AtlasInfo {
    let layout = grid_layout_for(frame_count);
    let total_cells = (layout.cols * layout.rows) as usize;
    let used_cells = frame_count.min(total_cells);
    AtlasInfo {
        frame_count,
        atlas_size: ATLAS_SIZE,
        layout_name: format!("{}x{}", layout.cols, layout.rows),
        cols: layout.cols,
        rows: layout.rows,
        cell_size: layout.cell_size,
        total_cells,
        used_cells,
        unused_cells: total_cells - used_cells,
    }
}

/// Whether a frame count is within the platform limits (1-64).
pub fn validate_frame_count(frame_count: usize) -> bool {
    (1..=MAX_ATLAS_FRAMES).contains(&frame_count)
}

/// Whether a playback rate is within the platform limits (1-60).
pub fn validate_fps(fps: u32) -> bool {
    (1..=60).contains(&fps)
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/layout.rs"]
mod tests;
