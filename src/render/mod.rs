pub mod export;
pub mod heatmap;

pub use export::{encode_png, export_file_name, IMAGE_EXTENSION};
pub use heatmap::{sample_color, Cell, HeatmapLayout, RowLayout};

use anyhow::Result;

use crate::{config::ColorOverflow, host::CanvasSurface, recording::TargetRecording};

/// Lay out, paint and encode a heat-map in one go.
pub fn render_png(
    recordings: &[TargetRecording],
    canvas: CanvasSurface,
    overflow: ColorOverflow,
) -> Result<Vec<u8>> {
    let image = HeatmapLayout::compute(recordings, canvas, overflow).rasterize();
    encode_png(&image)
}
