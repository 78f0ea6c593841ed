use crate::ImageError;
use glow_base::{Rect, Vec2};
use std::fmt;

/// Bytes per pixel; frames are always packed RGB8.
pub const CHANNELS: usize = 3;

/// An RGB8 image in row-major HWC layout.
///
/// Every pipeline stage consumes and produces frames of this type: the
/// camera's capture, the rectified canonical screen, and its cropped view.
#[derive(Clone, PartialEq)]
pub struct Frame {
    size: Vec2<usize>,
    data: Vec<u8>,
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("size", &self.size)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Frame {
    /// Wrap packed RGB bytes, checking the length against `size`.
    pub fn new(size: Vec2<usize>, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = size.area() * CHANNELS;
        if data.len() != expected {
            return Err(ImageError::Shape {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// A frame of a single solid color.
    pub fn filled(size: Vec2<usize>, rgb: [u8; 3]) -> Self {
        let data = rgb.iter().copied().cycle().take(size.area() * CHANNELS).collect();
        Self { size, data }
    }

    /// Build a frame by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(size: Vec2<usize>, mut f: impl FnMut(usize, usize) -> [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(size.area() * CHANNELS);
        for y in 0..size.y {
            for x in 0..size.x {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { size, data }
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel at `(x, y)`. Panics when out of range, like slice indexing.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
    }

    /// Packed bytes of row `y`.
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.size.x * CHANNELS;
        &self.data[y * stride..(y + 1) * stride]
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size.x && y < self.size.y,
            "pixel ({x}, {y}) outside {:?} frame",
            self.size
        );
        (y * self.size.x + x) * CHANNELS
    }

    /// Copy out the region `rect`, which must lie inside the frame.
    pub fn crop(&self, rect: Rect<usize>) -> Result<Frame, ImageError> {
        if rect.is_empty() || !Rect::full(self.size).contains_rect(rect) {
            return Err(ImageError::OutOfBounds(format!(
                "crop {:?}+{:?} does not fit in {:?}",
                rect.origin, rect.size, self.size
            )));
        }
        let mut data = Vec::with_capacity(rect.area() * CHANNELS);
        let start = rect.origin.x * CHANNELS;
        let end = start + rect.size.x * CHANNELS;
        for y in rect.origin.y..rect.max().y {
            data.extend_from_slice(&self.row(y)[start..end]);
        }
        Ok(Frame {
            size: rect.size,
            data,
        })
    }

    /// Per-channel mean over the part of `rect` that overlaps the frame.
    ///
    /// Returns `None` if the overlap is empty.
    pub fn mean(&self, rect: Rect<usize>) -> Option<[f64; 3]> {
        let region = Rect::full(self.size).intersection(rect)?;
        let mut sums = [0u64; 3];
        let start = region.origin.x * CHANNELS;
        let end = start + region.size.x * CHANNELS;
        for y in region.origin.y..region.max().y {
            for px in self.row(y)[start..end].chunks_exact(CHANNELS) {
                sums[0] += u64::from(px[0]);
                sums[1] += u64::from(px[1]);
                sums[2] += u64::from(px[2]);
            }
        }
        let n = region.area() as f64;
        Some(sums.map(|s| s as f64 / n))
    }
}
