//! Frame type and image codecs for tvglow.
//!
//! Frames are packed RGB8 in HWC layout. Decoding wraps the `image` crate
//! (used for MJPEG camera payloads); encoding produces the JPEG snapshots
//! written by the diagnostics.

pub mod error;
pub mod frame;

pub use error::ImageError;
pub use frame::{CHANNELS, Frame};

use crates_image::ImageEncoder;
use glow_base::Vec2;
use std::path::Path;

/// Decode a compressed image (JPEG for camera MJPEG payloads) into an RGB frame.
///
/// Grayscale and alpha images are converted to RGB8.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format unsupported.
pub fn decode_frame(data: &[u8]) -> Result<Frame, ImageError> {
    let rgb = crates_image::load_from_memory(data)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    Frame::new(Vec2::new(width as usize, height as usize), rgb.into_raw())
}

/// Encode a frame as JPEG with the given quality (1-100).
pub fn encode_jpeg(frame: &Frame, quality: u8) -> Result<Vec<u8>, ImageError> {
    if frame.is_empty() {
        return Err(ImageError::Encode("cannot encode an empty frame".to_string()));
    }
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            frame.data(),
            frame.width() as u32,
            frame.height() as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encode `frame` as JPEG and write it to `path`, replacing any existing file.
pub fn save_jpeg(frame: &Frame, path: impl AsRef<Path>, quality: u8) -> Result<(), ImageError> {
    let bytes = encode_jpeg(frame, quality)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
