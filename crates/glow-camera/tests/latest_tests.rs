use glow_base::Vec2;
use glow_camera::{CameraError, latest_frame};
use glow_image::Frame;
use std::time::Duration;

fn numbered(n: u8) -> Frame {
    Frame::filled(Vec2::new(2, 2), [n, 0, 0])
}

#[tokio::test]
async fn test_stalled_consumer_gets_newest_frame() {
    let (publisher, mut receiver) = latest_frame();
    for n in 1..=5 {
        assert!(publisher.publish(Ok(numbered(n))));
    }

    let frame = receiver.recv().await.unwrap().unwrap();
    assert_eq!(frame.pixel(0, 0), [5, 0, 0]);

    // the older frames are gone, not queued
    publisher.publish(Ok(numbered(6)));
    let frame = receiver.recv().await.unwrap().unwrap();
    assert_eq!(frame.pixel(0, 0), [6, 0, 0]);
}

#[tokio::test]
async fn test_waits_for_capture_thread() {
    let (publisher, mut receiver) = latest_frame();
    let handle = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(20));
        publisher.publish(Ok(numbered(9)));
        // keep the publisher alive until after the publish
        publisher
    });

    let frame = receiver.recv().await.unwrap().unwrap();
    assert_eq!(frame.pixel(0, 0), [9, 0, 0]);
    drop(handle.join().unwrap());
}

#[tokio::test]
async fn test_error_is_delivered_before_close() {
    let (publisher, mut receiver) = latest_frame();
    publisher.publish(Err(CameraError::Stream("VIDIOC_DQBUF: EIO".to_string())));
    drop(publisher);

    assert!(matches!(
        receiver.recv().await,
        Some(Err(CameraError::Stream(_)))
    ));
    assert!(receiver.recv().await.is_none());
}

#[tokio::test]
async fn test_closed_publisher_ends_stream() {
    let (publisher, mut receiver) = latest_frame();
    drop(publisher);
    assert!(receiver.recv().await.is_none());
}

#[test]
fn test_dropped_receiver_stops_publisher() {
    let (publisher, receiver) = latest_frame();
    assert!(!publisher.is_closed());
    drop(receiver);
    assert!(publisher.is_closed());
    assert!(!publisher.publish(Ok(numbered(1))));
}
