use crate::latest::{FramePublisher, FrameResult, LatestFrame, latest_frame};
use crate::{CameraConfig, CameraError, FrameSource, convert::yuyv_to_frame};
use glow_base::Vec2;
use glow_image::Frame;
use std::thread::{self, JoinHandle};
use v4l::buffer::Type;
use v4l::control::{Control, Value};
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

// V4L2 control ids from linux/v4l2-controls.h
const CID_SATURATION: u32 = 0x0098_0902;
const CID_AUTO_WHITE_BALANCE: u32 = 0x0098_090c;
const CID_WHITE_BALANCE_TEMPERATURE: u32 = 0x0098_091a;
const CID_EXPOSURE_AUTO: u32 = 0x009a_0901;
const CID_EXPOSURE_ABSOLUTE: u32 = 0x009a_0902;
const EXPOSURE_MANUAL: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PixelFormat {
    Mjpeg,
    Yuyv,
}

/// V4L2 webcam source.
///
/// Frames are captured on a dedicated thread that keeps dequeuing driver
/// buffers at the sensor rate. Each decoded frame overwrites the previous
/// unread one, so `fetch` returns the newest frame and frames that arrive
/// while the consumer is busy are dropped.
pub struct V4l2Camera {
    config: CameraConfig,
    size: Vec2<usize>,
    format: PixelFormat,
    device: Option<Device>,
    receiver: Option<LatestFrame>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("size", &self.size)
            .field("format", &self.format)
            .field("streaming", &self.receiver.is_some())
            .finish()
    }
}

impl FrameSource for V4l2Camera {
    async fn fetch(&mut self) -> Result<Frame, CameraError> {
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("receiver not initialized".to_string()))?;

        receiver
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("capture thread stopped".to_string()))?
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // the capture thread exits after its next frame once the receiver is gone
        drop(self.receiver.take());
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Open the device, negotiate format and frame rate, and pin the
    /// exposure, white balance and saturation controls.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::DeviceUnavailable` if the device cannot be
    /// opened, or accepts neither MJPEG nor YUYV.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device()).map_err(|e| {
            CameraError::DeviceUnavailable(format!("unable to open {}: {e}", config.device()))
        })?;

        let requested = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        let actual = Capture::set_format(&device, &requested)?;
        let format = match &actual.fourcc.repr {
            b"MJPG" => PixelFormat::Mjpeg,
            b"YUYV" => PixelFormat::Yuyv,
            _ => {
                return Err(CameraError::DeviceUnavailable(format!(
                    "unsupported pixel format {}",
                    actual.fourcc
                )));
            }
        };
        let size = Vec2::new(actual.width as usize, actual.height as usize);
        if actual.width != config.width() || actual.height != config.height() {
            log::warn!(
                "requested {}x{}, device delivers {}x{}",
                config.width(),
                config.height(),
                size.x,
                size.y
            );
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        Self::apply_controls(&device, &config);

        log::info!(
            "opened {} at {}x{} ({:?}, {} fps)",
            config.device(),
            size.x,
            size.y,
            format,
            config.fps()
        );

        Ok(Self {
            config,
            size,
            format,
            device: Some(device),
            receiver: None,
            thread_handle: None,
        })
    }

    fn apply_controls(device: &Device, config: &CameraConfig) {
        let mut controls = vec![(CID_AUTO_WHITE_BALANCE, 0, "auto white balance")];
        if let Some(exposure) = config.exposure() {
            controls.push((CID_EXPOSURE_AUTO, EXPOSURE_MANUAL, "exposure mode"));
            controls.push((CID_EXPOSURE_ABSOLUTE, exposure, "exposure"));
        }
        if let Some(kelvin) = config.white_balance() {
            controls.push((CID_WHITE_BALANCE_TEMPERATURE, kelvin, "white balance"));
        }
        if let Some(saturation) = config.saturation() {
            controls.push((CID_SATURATION, saturation, "saturation"));
        }

        // not every webcam exposes every control; a missing one is not fatal
        for (id, value, name) in controls {
            let control = Control {
                id,
                value: Value::Integer(value),
            };
            match device.set_control(control) {
                Ok(()) => log::debug!("set {name} to {value}"),
                Err(e) => log::warn!("could not set {name}: {e}"),
            }
        }
    }

    /// Actual capture size negotiated with the driver.
    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::DeviceUnavailable("device already consumed".to_string()))?;

        let (publisher, receiver) = latest_frame();
        let buffer_count = self.config.buffer_count();
        let size = self.size;
        let format = self.format;

        let handle = thread::spawn(move || {
            if let Err(e) = Self::capture_loop(device, &publisher, buffer_count, size, format) {
                log::error!("capture thread error: {e}");
                publisher.publish(Err(e));
            }
        });

        self.receiver = Some(receiver);
        self.thread_handle = Some(handle);
        Ok(())
    }

    fn capture_loop(
        device: Device,
        publisher: &FramePublisher,
        buffer_count: u32,
        size: Vec2<usize>,
        format: PixelFormat,
    ) -> Result<(), CameraError> {
        let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count)
            .map_err(|e| CameraError::Stream(e.to_string()))?;

        loop {
            let result = match CaptureStream::next(&mut stream) {
                Ok((data, meta)) => {
                    // bytesused is 0 for dropped or corrupted buffers
                    let used = (meta.bytesused as usize).min(data.len());
                    Self::to_frame(&data[..used], size, format)
                }
                Err(e) => Err(CameraError::Stream(e.to_string())),
            };

            if !publisher.publish(result) {
                // receiver dropped
                return Ok(());
            }
        }
    }

    fn to_frame(data: &[u8], size: Vec2<usize>, format: PixelFormat) -> FrameResult {
        if data.is_empty() {
            return Err(CameraError::EmptyFrame);
        }
        match format {
            PixelFormat::Mjpeg => Ok(glow_image::decode_frame(data)?),
            PixelFormat::Yuyv => yuyv_to_frame(data, size).ok_or(CameraError::EmptyFrame),
        }
    }
}
