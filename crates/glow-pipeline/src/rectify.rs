use crate::{PerspectiveTransform, PipelineError};
use glow_base::Vec2;
use glow_image::Frame;

/// Warps camera frames into the screen rectangle.
///
/// The source position of every output pixel is computed once up front;
/// `rectify` only samples. Output pixels whose source lies outside the
/// camera frame come out black.
pub struct Rectifier {
    transform: PerspectiveTransform,
    size: Vec2<usize>,
    lut: Vec<Option<Vec2<f32>>>,
}

impl Rectifier {
    pub fn new(transform: PerspectiveTransform, size: Vec2<usize>) -> Self {
        let mut lut = Vec::with_capacity(size.area());
        for y in 0..size.y {
            for x in 0..size.x {
                let source = transform
                    .apply_inverse(Vec2::new(x as f64, y as f64))
                    .filter(|p| p.x.is_finite() && p.y.is_finite())
                    .map(|p| Vec2::new(p.x as f32, p.y as f32));
                lut.push(source);
            }
        }
        Self {
            transform,
            size,
            lut,
        }
    }

    pub fn transform(&self) -> &PerspectiveTransform {
        &self.transform
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    /// Warp `frame`. An empty frame is an error, not a black picture.
    pub fn rectify(&self, frame: &Frame) -> Result<Frame, PipelineError> {
        if frame.is_empty() {
            return Err(PipelineError::EmptyFrame("rectifier"));
        }
        Ok(Frame::from_fn(self.size, |x, y| match self.lut[y * self.size.x + x] {
            Some(p) => bilinear(frame, p.x, p.y),
            None => [0, 0, 0],
        }))
    }
}

/// Bilinear sample at `(x, y)`; neighbours outside the frame read as black.
fn bilinear(frame: &Frame, x: f32, y: f32) -> [u8; 3] {
    let w = frame.width() as f32;
    let h = frame.height() as f32;
    if x <= -1.0 || y <= -1.0 || x >= w || y >= h {
        return [0, 0, 0];
    }

    let x0f = x.floor();
    let y0f = y.floor();
    let fx = x - x0f;
    let fy = y - y0f;
    let x0 = x0f as i64;
    let y0 = y0f as i64;

    let taps = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1, y0, fx * (1.0 - fy)),
        (x0, y0 + 1, (1.0 - fx) * fy),
        (x0 + 1, y0 + 1, fx * fy),
    ];

    let mut acc = [0.0f32; 3];
    for (tx, ty, weight) in taps {
        if weight == 0.0 || tx < 0 || ty < 0 {
            continue;
        }
        let (tx, ty) = (tx as usize, ty as usize);
        if tx >= frame.width() || ty >= frame.height() {
            continue;
        }
        let px = frame.pixel(tx, ty);
        for c in 0..3 {
            acc[c] += weight * f32::from(px[c]);
        }
    }
    acc.map(|v| v.round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bilinear_midpoint() {
        let frame = Frame::from_fn(Vec2::new(2, 1), |x, _| {
            if x == 0 { [0, 0, 0] } else { [200, 100, 50] }
        });
        assert_eq!(bilinear(&frame, 0.5, 0.0), [100, 50, 25]);
    }

    #[test]
    fn test_bilinear_border_is_black() {
        let frame = Frame::filled(Vec2::new(4, 4), [255, 255, 255]);
        assert_eq!(bilinear(&frame, -3.0, 1.0), [0, 0, 0]);
        assert_eq!(bilinear(&frame, 1.0, 4.0), [0, 0, 0]);
        // half a pixel off the right edge blends with the black border
        assert_eq!(bilinear(&frame, 3.5, 1.0), [128, 128, 128]);
    }
}
