use crate::{PerspectiveTransform, PipelineError};
use glow_base::Vec2;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the screen's corners sit in the camera image, in camera pixels.
///
/// Order is top-left, top-right, bottom-left, bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Calibration {
    source: [[f64; 2]; 4],
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            source: [[320.0, 217.0], [523.0, 214.0], [319.0, 352.0], [520.0, 375.0]],
        }
    }
}

impl Calibration {
    pub fn new(corners: [Vec2<f64>; 4]) -> Self {
        Self {
            source: corners.map(|p| [p.x, p.y]),
        }
    }

    pub fn corners(&self) -> [Vec2<f64>; 4] {
        self.source.map(|[x, y]| Vec2::new(x, y))
    }
}

/// Tuning for black-bar detection.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LetterboxConfig {
    /// A probe is dark when every channel mean is below this (0-255 scale).
    pub darkness_threshold: f64,
    /// Consecutive dark frames needed before a crop takes effect.
    pub persistence_frames: u32,
    /// Side of the square probe regions, in rectified pixels.
    pub probe_size: usize,
    /// Side bars of 4:3 content are `width / bar_width_divisor` wide.
    pub bar_width_divisor: usize,
    /// Bars of 21:9 content are `height / bar_height_divisor` tall.
    pub bar_height_divisor: usize,
}

impl Default for LetterboxConfig {
    fn default() -> Self {
        Self {
            darkness_threshold: 20.0,
            persistence_frames: 200,
            probe_size: 5,
            bar_width_divisor: 7,
            bar_height_divisor: 8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub every_n_ticks: u64,
    /// Write `snapshot.jpg` and `warped.jpg` here on every report.
    pub snapshot_dir: Option<PathBuf>,
    pub jpeg_quality: u8,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            every_n_ticks: 200,
            snapshot_dir: None,
            jpeg_quality: 90,
        }
    }
}

impl DiagnosticsConfig {
    pub fn snapshot_dir(&self) -> Option<&Path> {
        self.snapshot_dir.as_deref()
    }
}

/// Everything between a camera frame and the smoothed zone colors.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    calibration: Calibration,
    rectified_width: usize,
    rectified_height: usize,
    zone_rows: usize,
    zone_cols: usize,
    window_ms: f64,
    letterbox: LetterboxConfig,
    diagnostics: DiagnosticsConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            calibration: Calibration::default(),
            rectified_width: 256,
            rectified_height: 144,
            zone_rows: 3,
            zone_cols: 3,
            window_ms: crate::smoother::WINDOW_MS,
            letterbox: LetterboxConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    /// Size of the warped screen image the zones are sampled from.
    pub fn with_rectified_size(mut self, width: usize, height: usize) -> Self {
        self.rectified_width = width;
        self.rectified_height = height;
        self
    }

    pub fn with_zones(mut self, rows: usize, cols: usize) -> Self {
        self.zone_rows = rows;
        self.zone_cols = cols;
        self
    }

    /// Time constant of the exponential smoothing, in milliseconds.
    pub fn with_window_ms(mut self, window_ms: f64) -> Self {
        self.window_ms = window_ms;
        self
    }

    pub fn with_letterbox(mut self, letterbox: LetterboxConfig) -> Self {
        self.letterbox = letterbox;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn rectified_size(&self) -> Vec2<usize> {
        Vec2::new(self.rectified_width, self.rectified_height)
    }

    pub fn zone_rows(&self) -> usize {
        self.zone_rows
    }

    pub fn zone_cols(&self) -> usize {
        self.zone_cols
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    pub fn letterbox(&self) -> &LetterboxConfig {
        &self.letterbox
    }

    pub fn diagnostics(&self) -> &DiagnosticsConfig {
        &self.diagnostics
    }

    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let invalid = |msg: String| Err(PipelineError::InvalidConfig(msg));

        if self.rectified_width == 0 || self.rectified_height == 0 {
            return invalid(format!(
                "rectified size {}x{} must be non-zero",
                self.rectified_width, self.rectified_height
            ));
        }
        if self.zone_rows == 0 || self.zone_cols == 0 {
            return invalid(format!(
                "zone grid {}x{} must be non-zero",
                self.zone_rows, self.zone_cols
            ));
        }
        if !self.window_ms.is_finite() || self.window_ms <= 0.0 {
            return invalid(format!("window_ms must be positive, got {}", self.window_ms));
        }

        let lb = &self.letterbox;
        if lb.probe_size == 0 {
            return invalid("letterbox probe_size must be non-zero".to_string());
        }
        // a divisor of 2 or less would crop the whole frame away
        if lb.bar_width_divisor < 3 || lb.bar_height_divisor < 3 {
            return invalid(format!(
                "letterbox bar divisors must be at least 3, got {} and {}",
                lb.bar_width_divisor, lb.bar_height_divisor
            ));
        }
        if !lb.darkness_threshold.is_finite() {
            return invalid("letterbox darkness_threshold must be finite".to_string());
        }

        // zones must still get at least one pixel each after either crop
        let cropped_width = self.rectified_width - 2 * (self.rectified_width / lb.bar_width_divisor);
        let cropped_height =
            self.rectified_height - 2 * (self.rectified_height / lb.bar_height_divisor);
        if self.zone_cols > cropped_width || self.zone_rows > cropped_height {
            return invalid(format!(
                "zone grid {}x{} is finer than the cropped frame {}x{}",
                self.zone_rows, self.zone_cols, cropped_height, cropped_width
            ));
        }

        if self.diagnostics.every_n_ticks == 0 {
            return invalid("diagnostics every_n_ticks must be non-zero".to_string());
        }
        if !(1..=100).contains(&self.diagnostics.jpeg_quality) {
            return invalid(format!(
                "diagnostics jpeg_quality must be 1-100, got {}",
                self.diagnostics.jpeg_quality
            ));
        }

        PerspectiveTransform::to_rectangle(self.calibration.corners(), self.rectified_size())?;
        Ok(())
    }
}
