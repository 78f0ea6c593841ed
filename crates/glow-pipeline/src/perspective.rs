use crate::PipelineError;
use glow_base::{Mat3, Vec2};

const PIVOT_EPSILON: f64 = 1e-10;

/// Smallest twice-triangle-area (in square pixels) any three of the four
/// points may span before the quad counts as degenerate.
const MIN_TRIANGLE_AREA: f64 = 1e-6;

/// Projective mapping between two quadrilaterals.
///
/// Corners are given in the order top-left, top-right, bottom-left,
/// bottom-right. The forward matrix maps source to destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveTransform {
    matrix: Mat3,
    inverse: Mat3,
}

impl PerspectiveTransform {
    /// Solve the homography taking each `src[i]` to `dst[i]`.
    pub fn from_points(src: [Vec2<f64>; 4], dst: [Vec2<f64>; 4]) -> Result<Self, PipelineError> {
        check_quad("source", &src)?;
        check_quad("destination", &dst)?;

        let mut a = [[0.0f64; 8]; 8];
        let mut b = [0.0f64; 8];
        for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
            a[2 * i] = [s.x, s.y, 1.0, 0.0, 0.0, 0.0, -d.x * s.x, -d.x * s.y];
            b[2 * i] = d.x;
            a[2 * i + 1] = [0.0, 0.0, 0.0, s.x, s.y, 1.0, -d.y * s.x, -d.y * s.y];
            b[2 * i + 1] = d.y;
        }
        let h = solve(a, b).ok_or_else(|| {
            PipelineError::InvalidConfig("perspective system is singular".to_string())
        })?;

        let matrix = Mat3::from_rows([h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], 1.0]);
        let inverse = matrix.inverse().ok_or_else(|| {
            PipelineError::InvalidConfig("perspective matrix is not invertible".to_string())
        })?;
        Ok(Self { matrix, inverse })
    }

    /// Map a camera quad onto the full `size` rectangle, with the quad's
    /// corners landing on `(0, 0)`, `(w, 0)`, `(0, h)` and `(w, h)`.
    pub fn to_rectangle(src: [Vec2<f64>; 4], size: Vec2<usize>) -> Result<Self, PipelineError> {
        let w = size.x as f64;
        let h = size.y as f64;
        let dst = [
            Vec2::new(0.0, 0.0),
            Vec2::new(w, 0.0),
            Vec2::new(0.0, h),
            Vec2::new(w, h),
        ];
        Self::from_points(src, dst)
    }

    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    pub fn inverse_matrix(&self) -> Mat3 {
        self.inverse
    }

    /// Source to destination. `None` for points on the horizon line.
    pub fn apply(&self, point: Vec2<f64>) -> Option<Vec2<f64>> {
        self.matrix.project(point)
    }

    /// Destination to source.
    pub fn apply_inverse(&self, point: Vec2<f64>) -> Option<Vec2<f64>> {
        self.inverse.project(point)
    }
}

fn check_quad(name: &str, points: &[Vec2<f64>; 4]) -> Result<(), PipelineError> {
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(PipelineError::InvalidConfig(format!(
            "{name} corners must be finite"
        )));
    }
    for skip in 0..4 {
        let mut triangle = points
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, p)| *p);
        if let (Some(p0), Some(p1), Some(p2)) = (triangle.next(), triangle.next(), triangle.next()) {
            if (p1 - p0).cross(p2 - p0).abs() < MIN_TRIANGLE_AREA {
                return Err(PipelineError::InvalidConfig(format!(
                    "{name} corners are degenerate: three of them are collinear"
                )));
            }
        }
    }
    Ok(())
}

/// Gaussian elimination with partial pivoting on an 8×8 system.
fn solve(mut a: [[f64; 8]; 8], mut b: [f64; 8]) -> Option<[f64; 8]> {
    const N: usize = 8;
    for col in 0..N {
        let pivot_row = (col..N).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot_row][col].abs() < PIVOT_EPSILON {
            return None;
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..N {
            let factor = a[row][col] / a[col][col];
            for k in col..N {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; N];
    for row in (0..N).rev() {
        let tail: f64 = ((row + 1)..N).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}
