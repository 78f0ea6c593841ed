//! Camera frame to ambient light colors.
//!
//! Each tick a camera frame is warped onto the screen rectangle
//! ([`Rectifier`]), stripped of persistent black bars
//! ([`LetterboxDetector`]), resized to one sample per zone
//! ([`ZoneAverager`]) and blended into the running zone colors with a
//! time-weighted moving average ([`TemporalSmoother`]). [`Pipeline`] chains
//! the stages and [`Runner`] drives it between a
//! [`FrameSource`](glow_camera::FrameSource) and a [`LightSink`].

pub mod color;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod layout;
pub mod letterbox;
pub mod perspective;
pub mod pipeline;
pub mod rectify;
pub mod runner;
pub mod sink;
pub mod smoother;
pub mod zones;

pub use color::Color;
pub use config::{Calibration, DiagnosticsConfig, LetterboxConfig, PipelineConfig};
pub use diagnostics::{Diagnostics, StatusReport};
pub use error::PipelineError;
pub use grid::ZoneGrid;
pub use layout::{ZoneArea, zone_area, zone_areas};
pub use letterbox::{CropDecision, LetterboxDetector, LetterboxState};
pub use perspective::PerspectiveTransform;
pub use pipeline::{Pipeline, TickOutput};
pub use rectify::Rectifier;
pub use runner::Runner;
pub use sink::LightSink;
pub use smoother::{TemporalSmoother, WINDOW_MS, moving_average};
pub use zones::ZoneAverager;
