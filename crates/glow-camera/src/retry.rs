use crate::{CameraError, FrameSource};
use glow_image::Frame;
use std::time::Duration;

// upper bound for the doubling backoff
const MAX_BACKOFF: Duration = Duration::from_secs(2);

/// Retries transient fetch failures with exponential backoff.
///
/// Empty frames, stream hiccups and undecodable payloads are retried until
/// `max_consecutive_failures` fetches in a row have failed; the last error is
/// then returned. Device and channel errors are returned immediately.
pub struct RetryingSource<S> {
    inner: S,
    max_consecutive_failures: u32,
    backoff: Duration,
}

impl<S: FrameSource> RetryingSource<S> {
    pub fn new(inner: S, max_consecutive_failures: u32, backoff: Duration) -> Self {
        Self {
            inner,
            max_consecutive_failures: max_consecutive_failures.max(1),
            backoff,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn delay(&self, failures: u32) -> Duration {
        let factor = 1u32 << (failures - 1).min(16);
        self.backoff.saturating_mul(factor).min(MAX_BACKOFF)
    }
}

impl<S: FrameSource> FrameSource for RetryingSource<S> {
    async fn fetch(&mut self) -> Result<Frame, CameraError> {
        let mut failures = 0;
        loop {
            let error = match self.inner.fetch().await {
                Ok(frame) if !frame.is_empty() => return Ok(frame),
                Ok(_) => CameraError::EmptyFrame,
                Err(error) => error,
            };
            if !error.is_transient() {
                return Err(error);
            }

            failures += 1;
            if failures >= self.max_consecutive_failures {
                log::error!("giving up after {failures} consecutive capture failures: {error}");
                return Err(error);
            }

            let delay = self.delay(failures);
            log::warn!(
                "capture failed ({error}), retry {failures}/{} in {}ms",
                self.max_consecutive_failures - 1,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }
}
