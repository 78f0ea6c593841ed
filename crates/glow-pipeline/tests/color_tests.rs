use glow_camera::CameraError;
use glow_pipeline::{Color, PipelineError};
use std::error::Error;

#[test]
fn test_from_rgb8_scales_to_unit_range() {
    let c = Color::from_rgb8([0, 128, 255]);
    assert_eq!(c.r, 0.0);
    assert!((c.g - 0.50196).abs() < 1e-5);
    assert_eq!(c.b, 1.0);
}

#[test]
fn test_to_rgb8_rounds_and_clamps() {
    assert_eq!(Color::new(0.5, -0.2, 1.7).to_rgb8(), [128, 0, 255]);
    for v in 0..=255u8 {
        assert_eq!(Color::from_rgb8([v, v, v]).to_rgb8(), [v, v, v]);
    }
}

#[test]
fn test_zip_with() {
    let sum = Color::new(0.1, 0.2, 0.3).zip_with(Color::new(0.4, 0.5, 0.6), |a, b| a + b);
    assert!((sum.r - 0.5).abs() < 1e-12);
    assert!((sum.g - 0.7).abs() < 1e-12);
    assert!((sum.b - 0.9).abs() < 1e-12);
}

#[test]
fn test_error_display_and_source() {
    let err = PipelineError::from(CameraError::EmptyFrame);
    assert_eq!(err.to_string(), "camera error: blank frame grabbed");
    assert!(err.source().is_some());

    let err = PipelineError::InvalidElapsedTime(-3.0);
    assert_eq!(err.to_string(), "invalid elapsed time: -3 ms");
    assert!(err.source().is_none());
}

#[test]
fn test_empty_frame_display() {
    let err = PipelineError::EmptyFrame("rectifier");
    assert_eq!(err.to_string(), "empty frame passed to rectifier");
    assert!(err.source().is_none());
}
