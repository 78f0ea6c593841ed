use glow_camera::CameraError;
use glow_image::ImageError;
use std::error::Error;
use std::io;

#[test]
fn test_from_io_error_is_device_unavailable() {
    let err: CameraError = io::Error::new(io::ErrorKind::NotFound, "no such device").into();
    match err {
        CameraError::DeviceUnavailable(msg) => assert!(msg.contains("no such device")),
        other => panic!("expected DeviceUnavailable, got {other:?}"),
    }
}

#[test]
fn test_from_image_error() {
    let err: CameraError = ImageError::Decode("truncated JPEG".to_string()).into();
    assert!(matches!(err, CameraError::Decode(_)));
    assert!(err.source().is_some());
    assert!(err.to_string().contains("truncated JPEG"));
}

#[test]
fn test_transient_classification() {
    assert!(CameraError::EmptyFrame.is_transient());
    assert!(CameraError::Stream("EIO".to_string()).is_transient());
    assert!(CameraError::Decode(ImageError::Decode("bad".to_string())).is_transient());
    assert!(!CameraError::DeviceUnavailable("gone".to_string()).is_transient());
    assert!(!CameraError::Channel("closed".to_string()).is_transient());
}

#[test]
fn test_display() {
    assert_eq!(CameraError::EmptyFrame.to_string(), "blank frame grabbed");
    assert!(
        CameraError::DeviceUnavailable("/dev/video0".to_string())
            .to_string()
            .contains("/dev/video0")
    );
    assert!(
        CameraError::Channel("capture thread stopped".to_string())
            .to_string()
            .contains("capture thread stopped")
    );
}
