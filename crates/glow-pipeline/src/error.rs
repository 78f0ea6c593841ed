use glow_camera::CameraError;
use glow_image::ImageError;
use std::fmt;

#[derive(Debug)]
pub enum PipelineError {
    Camera(CameraError),
    Image(ImageError),
    /// A stage was handed a frame with no pixels.
    EmptyFrame(&'static str),
    /// Elapsed time fed to the smoother was negative or not finite.
    InvalidElapsedTime(f64),
    InvalidConfig(String),
    Sink(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Camera(err) => write!(f, "camera error: {err}"),
            PipelineError::Image(err) => write!(f, "image error: {err}"),
            PipelineError::EmptyFrame(stage) => write!(f, "empty frame passed to {stage}"),
            PipelineError::InvalidElapsedTime(ms) => {
                write!(f, "invalid elapsed time: {ms} ms")
            }
            PipelineError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            PipelineError::Sink(msg) => write!(f, "light sink error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Camera(err) => Some(err),
            PipelineError::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CameraError> for PipelineError {
    fn from(err: CameraError) -> Self {
        PipelineError::Camera(err)
    }
}

impl From<ImageError> for PipelineError {
    fn from(err: ImageError) -> Self {
        PipelineError::Image(err)
    }
}
