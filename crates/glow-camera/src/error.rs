use glow_image::ImageError;
use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// The capture device could not be opened or configured.
    DeviceUnavailable(String),
    /// The device delivered a frame with no pixel data.
    EmptyFrame,
    Stream(String),
    Decode(ImageError),
    Channel(String),
}

impl CameraError {
    /// Whether a later fetch may succeed after this failure.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CameraError::EmptyFrame | CameraError::Stream(_) | CameraError::Decode(_)
        )
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::DeviceUnavailable(msg) => write!(f, "device unavailable: {msg}"),
            CameraError::EmptyFrame => write!(f, "blank frame grabbed"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CameraError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::DeviceUnavailable(err.to_string())
    }
}

impl From<ImageError> for CameraError {
    fn from(err: ImageError) -> Self {
        CameraError::Decode(err)
    }
}
