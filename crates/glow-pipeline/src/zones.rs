use crate::{Color, PipelineError, ZoneGrid};
use glow_image::Frame;

/// Source column (or row) that output cell `dst` of `dst_len` reads from
/// when `src_len` pixels are resized nearest-neighbour.
pub fn nearest_index(dst: usize, dst_len: usize, src_len: usize) -> usize {
    ((dst * src_len) / dst_len).min(src_len.saturating_sub(1))
}

/// Downsamples a frame to one color per zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneAverager {
    rows: usize,
    cols: usize,
}

impl ZoneAverager {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Nearest-neighbour resize of `frame` to `rows × cols`, scaled to
    /// `[0, 1]`.
    pub fn sample(&self, frame: &Frame) -> Result<ZoneGrid<Color>, PipelineError> {
        if frame.is_empty() {
            return Err(PipelineError::EmptyFrame("zone averager"));
        }
        Ok(ZoneGrid::from_fn(self.rows, self.cols, |row, col| {
            let x = nearest_index(col, self.cols, frame.width());
            let y = nearest_index(row, self.rows, frame.height());
            Color::from_rgb8(frame.pixel(x, y))
        }))
    }
}
