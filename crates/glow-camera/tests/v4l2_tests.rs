#[cfg(feature = "v4l2")]
mod v4l2_tests {
    use glow_camera::{CameraConfig, CameraError, V4l2Camera};

    #[test]
    fn test_missing_device_is_unavailable() {
        let config = CameraConfig::default().with_device("/dev/video-does-not-exist".to_string());
        match V4l2Camera::new(config) {
            Err(CameraError::DeviceUnavailable(msg)) => {
                assert!(msg.contains("/dev/video-does-not-exist"))
            }
            other => panic!("expected DeviceUnavailable, got {other:?}"),
        }
    }
}
