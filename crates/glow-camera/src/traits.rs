use crate::CameraError;
use glow_image::Frame;

/// A device that produces RGB frames on demand.
///
/// Each call blocks (asynchronously) until one frame is available and
/// returns it; sources keep no history beyond the frame being handed out.
/// A successful fetch never returns an empty frame.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    async fn fetch(&mut self) -> Result<Frame, CameraError>;
}
