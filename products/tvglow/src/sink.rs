use glow_pipeline::{Color, LightSink, PipelineError, ZoneGrid, zone_areas};

/// Light sink that writes zone colors to the log.
///
/// Stands in for a lighting bridge: the zone layout is logged once, colors
/// are logged at trace level on every tick.
pub struct LogSink {
    rows: usize,
    cols: usize,
    frames: u64,
    closed: bool,
}

impl LogSink {
    pub fn new(rows: usize, cols: usize) -> Self {
        for ((row, col), area) in zone_areas(rows, cols).iter() {
            log::info!(
                "zone ({row}, {col}): x {:.3}..{:.3}, y {:.3}..{:.3}",
                area.left,
                area.right,
                area.bottom,
                area.top
            );
        }
        Self {
            rows,
            cols,
            frames: 0,
            closed: false,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl LightSink for LogSink {
    fn render(&mut self, colors: &ZoneGrid<Color>) -> Result<(), PipelineError> {
        if self.closed {
            return Err(PipelineError::Sink("render after shutdown".to_string()));
        }
        if colors.rows() != self.rows || colors.cols() != self.cols {
            return Err(PipelineError::Sink(format!(
                "expected {}x{} zones, got {}x{}",
                self.rows,
                self.cols,
                colors.rows(),
                colors.cols()
            )));
        }
        self.frames += 1;
        if log::log_enabled!(log::Level::Trace) {
            let rgb: Vec<[u8; 3]> = colors.values().iter().map(|c| c.to_rgb8()).collect();
            log::trace!("frame {}: {rgb:?}", self.frames);
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), PipelineError> {
        if !self.closed {
            log::info!("light sink closed after {} frames", self.frames);
            self.closed = true;
        }
        Ok(())
    }
}
