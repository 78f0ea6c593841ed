/// Linear RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Scale 8-bit channels to `[0, 1]`.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            f64::from(rgb[0]) / 255.0,
            f64::from(rgb[1]) / 255.0,
            f64::from(rgb[2]) / 255.0,
        )
    }

    /// Back to the 0-255 scale, rounded and clamped.
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// Apply `f` to each channel pair of `self` and `other`.
    pub fn zip_with(self, other: Color, mut f: impl FnMut(f64, f64) -> f64) -> Color {
        Color::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b))
    }
}
