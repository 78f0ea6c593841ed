use crate::{Color, CropDecision, DiagnosticsConfig, ZoneGrid};
use glow_image::{Frame, save_jpeg};
use std::time::Duration;

pub const RAW_SNAPSHOT: &str = "snapshot.jpg";
pub const RECTIFIED_SNAPSHOT: &str = "warped.jpg";

/// Summary emitted every `every_n_ticks` ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusReport {
    pub ticks: u64,
    pub average_tick: Duration,
    pub crop: CropDecision,
    pub colors: ZoneGrid<[u8; 3]>,
}

/// Periodic status logging and snapshots. Nothing here can fail a tick.
pub struct Diagnostics {
    config: DiagnosticsConfig,
    ticks: u64,
    window_ticks: u32,
    window_time: Duration,
}

impl Diagnostics {
    pub fn new(config: DiagnosticsConfig) -> Self {
        Self {
            config,
            ticks: 0,
            window_ticks: 0,
            window_time: Duration::ZERO,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Account for one finished tick; returns a report on every Nth.
    pub fn record(
        &mut self,
        tick_time: Duration,
        raw: &Frame,
        rectified: &Frame,
        crop: CropDecision,
        colors: &ZoneGrid<Color>,
    ) -> Option<StatusReport> {
        self.ticks += 1;
        self.window_ticks += 1;
        self.window_time += tick_time;
        if self.ticks % self.config.every_n_ticks.max(1) != 0 {
            return None;
        }

        let report = StatusReport {
            ticks: self.ticks,
            average_tick: self.window_time / self.window_ticks,
            crop,
            colors: ZoneGrid::from_fn(colors.rows(), colors.cols(), |row, col| {
                colors
                    .get(row, col)
                    .map_or([0, 0, 0], |color| color.to_rgb8())
            }),
        };
        self.window_ticks = 0;
        self.window_time = Duration::ZERO;

        log::info!(
            "tick {}: average {:.1} ms, crop {}",
            report.ticks,
            report.average_tick.as_secs_f64() * 1000.0,
            report.crop
        );
        for ((row, col), rgb) in report.colors.iter() {
            log::debug!("zone ({row}, {col}): {} {} {}", rgb[0], rgb[1], rgb[2]);
        }
        self.save_snapshots(raw, rectified);
        Some(report)
    }

    fn save_snapshots(&self, raw: &Frame, rectified: &Frame) {
        let Some(dir) = self.config.snapshot_dir() else {
            return;
        };
        let quality = self.config.jpeg_quality;
        for (frame, name) in [(raw, RAW_SNAPSHOT), (rectified, RECTIFIED_SNAPSHOT)] {
            let path = dir.join(name);
            if let Err(err) = save_jpeg(frame, &path, quality) {
                log::warn!("unable to write {}: {err}", path.display());
            }
        }
    }
}
