use image::{Rgba, RgbaImage};

use crate::{
    config::ColorOverflow,
    host::CanvasSurface,
    models::{Sample, TargetId},
    recording::TargetRecording,
};

/// One filled rectangle, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: [u8; 3],
}

/// One recorded input: a horizontal band split into one column per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub target: TargetId,
    pub y: f64,
    pub height: f64,
    pub column_width: f64,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapLayout {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<RowLayout>,
}

impl HeatmapLayout {
    /// Rows share the canvas height evenly; each row's width is split evenly
    /// between that input's samples, so column widths differ per row.
    pub fn compute(
        recordings: &[TargetRecording],
        canvas: CanvasSurface,
        overflow: ColorOverflow,
    ) -> Self {
        let mut rows = Vec::with_capacity(recordings.len());

        if !recordings.is_empty() {
            let row_height = canvas.height as f64 / recordings.len() as f64;

            for (r, recording) in recordings.iter().enumerate() {
                let y = r as f64 * row_height;
                let column_width = if recording.samples.is_empty() {
                    0.0
                } else {
                    canvas.width as f64 / recording.samples.len() as f64
                };

                let cells = recording
                    .samples
                    .iter()
                    .enumerate()
                    .map(|(c, sample)| Cell {
                        x: c as f64 * column_width,
                        y,
                        width: column_width,
                        height: row_height,
                        color: sample_color(sample, overflow),
                    })
                    .collect();

                rows.push(RowLayout {
                    target: recording.target,
                    y,
                    height: row_height,
                    column_width,
                    cells,
                });
            }
        }

        Self {
            width: canvas.width,
            height: canvas.height,
            rows,
        }
    }

    /// Paint onto a transparent canvas. Cell edges are rounded to the nearest
    /// pixel so neighbouring cells neither overlap nor leave gaps.
    pub fn rasterize(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width, self.height);

        for cell in self.rows.iter().flat_map(|row| row.cells.iter()) {
            let (x0, x1) = pixel_span(cell.x, cell.width, self.width);
            let (y0, y1) = pixel_span(cell.y, cell.height, self.height);
            let [r, g, b] = cell.color;
            for y in y0..y1 {
                for x in x0..x1 {
                    image.put_pixel(x, y, Rgba([r, g, b, 255]));
                }
            }
        }

        image
    }
}

fn pixel_span(start: f64, extent: f64, limit: u32) -> (u32, u32) {
    let to_pixel = |v: f64| (v.round().max(0.0) as u32).min(limit);
    (to_pixel(start), to_pixel(start + extent))
}

/// Red and green carry the raw pointer pixel coordinates, blue the key score.
pub fn sample_color(sample: &Sample, overflow: ColorOverflow) -> [u8; 3] {
    [
        channel(sample.pointer.x, overflow),
        channel(sample.pointer.y, overflow),
        channel(sample.key_score, overflow),
    ]
}

pub fn channel(value: f64, overflow: ColorOverflow) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    match overflow {
        ColorOverflow::Clamp => value.clamp(0.0, 255.0).round() as u8,
        ColorOverflow::Wrap => (value.trunc() as i64).rem_euclid(256) as u8,
    }
}
