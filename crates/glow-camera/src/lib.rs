//! Frame acquisition for tvglow.
//!
//! The [`FrameSource`] trait is the pull-based "give me the latest frame"
//! contract the pipeline consumes. [`V4l2Camera`] implements it for USB
//! webcams (feature `v4l2`), handing frames over through [`latest_frame`],
//! and [`RetryingSource`] wraps any source with bounded retry-with-backoff
//! for transient capture failures.

pub mod config;
pub mod convert;
pub mod error;
pub mod latest;
pub mod retry;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use latest::{FramePublisher, LatestFrame, latest_frame};
pub use retry::RetryingSource;
pub use traits::FrameSource;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
