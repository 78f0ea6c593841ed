use crate::CameraError;
use glow_image::Frame;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub type FrameResult = Result<Frame, CameraError>;

struct Shared {
    slot: Mutex<Option<FrameResult>>,
    notify: Notify,
    publisher_alive: AtomicBool,
    receiver_alive: AtomicBool,
}

impl Shared {
    fn take(&self) -> Option<FrameResult> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

/// Create a single-slot handoff from a capture thread to an async consumer.
///
/// Publishing replaces whatever the consumer has not picked up yet, so the
/// consumer always gets the newest frame and nothing queues up behind it.
pub fn latest_frame() -> (FramePublisher, LatestFrame) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(None),
        notify: Notify::new(),
        publisher_alive: AtomicBool::new(true),
        receiver_alive: AtomicBool::new(true),
    });
    (
        FramePublisher {
            shared: Arc::clone(&shared),
        },
        LatestFrame { shared },
    )
}

/// Producer half, owned by the capture thread. Never blocks.
pub struct FramePublisher {
    shared: Arc<Shared>,
}

impl FramePublisher {
    /// Store `result`, dropping any unread frame.
    ///
    /// Returns `false` once the receiver is gone.
    pub fn publish(&self, result: FrameResult) -> bool {
        if !self.shared.receiver_alive.load(Ordering::Acquire) {
            return false;
        }
        let stale = self
            .shared
            .slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(result);
        if stale.is_some() {
            log::trace!("dropped an unread frame");
        }
        self.shared.notify.notify_one();
        true
    }

    pub fn is_closed(&self) -> bool {
        !self.shared.receiver_alive.load(Ordering::Acquire)
    }
}

impl Drop for FramePublisher {
    fn drop(&mut self) {
        self.shared.publisher_alive.store(false, Ordering::Release);
        self.shared.notify.notify_one();
    }
}

/// Consumer half.
pub struct LatestFrame {
    shared: Arc<Shared>,
}

impl LatestFrame {
    /// Wait for the newest unread frame.
    ///
    /// Returns `None` once the publisher is gone and nothing is left.
    pub async fn recv(&mut self) -> Option<FrameResult> {
        loop {
            if let Some(result) = self.shared.take() {
                return Some(result);
            }
            if !self.shared.publisher_alive.load(Ordering::Acquire) {
                // a last publish may have landed between the two checks
                return self.shared.take();
            }
            self.shared.notify.notified().await;
        }
    }
}

impl Drop for LatestFrame {
    fn drop(&mut self) {
        self.shared.receiver_alive.store(false, Ordering::Release);
    }
}
