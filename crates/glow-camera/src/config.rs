use serde::Deserialize;
use std::time::Duration;

/// Capture settings, applied once when the device is opened.
///
/// Exposure and white balance are pinned so that the camera's own
/// automatics do not fight the lighting output it is looking at.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    device: String,
    width: u32,
    height: u32,
    fps: u32,
    buffer_count: u32,
    exposure: Option<i64>,
    white_balance: Option<i64>,
    saturation: Option<i64>,
    max_consecutive_failures: u32,
    retry_backoff_ms: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 1024,
            height: 576,
            fps: 30,
            buffer_count: 4,
            exposure: Some(85),
            white_balance: None,
            saturation: None,
            max_consecutive_failures: 1,
            retry_backoff_ms: 50,
        }
    }
}

impl CameraConfig {
    /// Set the device path (e.g., "/dev/video0").
    pub fn with_device(mut self, device: String) -> Self {
        self.device = device;
        self
    }

    /// Set the requested capture size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    /// Manual exposure in driver units (100 µs on UVC webcams).
    /// `None` leaves automatic exposure on.
    pub fn with_exposure(mut self, exposure: Option<i64>) -> Self {
        self.exposure = exposure;
        self
    }

    /// Fixed white-balance temperature in Kelvin. Automatic white balance is
    /// always disabled; `None` keeps the driver's current temperature.
    pub fn with_white_balance(mut self, kelvin: Option<i64>) -> Self {
        self.white_balance = kelvin;
        self
    }

    pub fn with_saturation(mut self, saturation: Option<i64>) -> Self {
        self.saturation = saturation;
        self
    }

    /// How many failed fetches in a row are tolerated before giving up.
    /// `1` makes the first failure fatal.
    pub fn with_max_consecutive_failures(mut self, count: u32) -> Self {
        self.max_consecutive_failures = count;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff_ms = backoff.as_millis() as u64;
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }

    pub fn exposure(&self) -> Option<i64> {
        self.exposure
    }

    pub fn white_balance(&self) -> Option<i64> {
        self.white_balance
    }

    pub fn saturation(&self) -> Option<i64> {
        self.saturation
    }

    pub fn max_consecutive_failures(&self) -> u32 {
        self.max_consecutive_failures
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}
