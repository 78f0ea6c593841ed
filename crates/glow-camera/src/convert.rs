use glow_base::Vec2;
use glow_image::Frame;

/// BT.601 full-range YUV to RGB for a single pixel.
fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = f32::from(y);
    let u = f32::from(u) - 128.0;
    let v = f32::from(v) - 128.0;
    [
        (y + 1.402 * v).round().clamp(0.0, 255.0) as u8,
        (y - 0.344 * u - 0.714 * v).round().clamp(0.0, 255.0) as u8,
        (y + 1.772 * u).round().clamp(0.0, 255.0) as u8,
    ]
}

/// Convert a packed YUYV (4:2:2) buffer to an RGB frame.
///
/// Each 4-byte group `[Y0, U, Y1, V]` yields two pixels sharing U and V.
/// Returns `None` if `data` is shorter than `width * height * 2` bytes or
/// the width is odd.
pub fn yuyv_to_frame(data: &[u8], size: Vec2<usize>) -> Option<Frame> {
    let expected = size.area() * 2;
    if data.len() < expected || size.x % 2 != 0 {
        return None;
    }

    let mut rgb = Vec::with_capacity(size.area() * 3);
    for group in data[..expected].chunks_exact(4) {
        rgb.extend_from_slice(&yuv_to_rgb(group[0], group[1], group[3]));
        rgb.extend_from_slice(&yuv_to_rgb(group[2], group[1], group[3]));
    }
    Frame::new(size, rgb).ok()
}
