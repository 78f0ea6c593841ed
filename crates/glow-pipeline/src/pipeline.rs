use crate::{
    Color, CropDecision, LetterboxDetector, LetterboxState, PerspectiveTransform, PipelineConfig,
    PipelineError, Rectifier, TemporalSmoother, ZoneAverager, ZoneGrid,
};
use glow_image::Frame;
use std::time::Duration;

/// What one tick produced besides the zone colors.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutput {
    /// Rectified frame with any black bars already removed.
    pub frame: Frame,
    pub crop: CropDecision,
    /// This tick's unsmoothed zone samples.
    pub samples: ZoneGrid<Color>,
}

/// Rectify, crop, sample and smooth, one camera frame at a time.
///
/// Zone colors start black and only change when a whole tick succeeds.
/// Empty frames are rejected without touching any state.
pub struct Pipeline {
    rectifier: Rectifier,
    letterbox: LetterboxDetector,
    averager: ZoneAverager,
    smoother: TemporalSmoother,
    colors: ZoneGrid<Color>,
}

impl Pipeline {
    pub fn new(config: &PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        let size = config.rectified_size();
        let transform = PerspectiveTransform::to_rectangle(config.calibration().corners(), size)?;
        log::debug!("perspective matrix: {:?}", transform.matrix().to_rows());

        let (rows, cols) = (config.zone_rows(), config.zone_cols());
        Ok(Self {
            rectifier: Rectifier::new(transform, size),
            letterbox: LetterboxDetector::new(config.letterbox().clone()),
            averager: ZoneAverager::new(rows, cols),
            smoother: TemporalSmoother::new(config.window_ms()),
            colors: ZoneGrid::filled(rows, cols, Color::BLACK),
        })
    }

    /// Run one camera frame through every stage.
    ///
    /// `elapsed` is the time since the previous successful tick.
    pub fn process(&mut self, raw: &Frame, elapsed: Duration) -> Result<TickOutput, PipelineError> {
        let rectified = self.rectifier.rectify(raw)?;
        self.process_rectified(rectified, elapsed)
    }

    /// Like [`process`](Self::process) for a frame that is already rectified.
    pub fn process_rectified(
        &mut self,
        rectified: Frame,
        elapsed: Duration,
    ) -> Result<TickOutput, PipelineError> {
        // rejected before the letterbox counters see it
        if rectified.is_empty() {
            return Err(PipelineError::EmptyFrame("pipeline"));
        }
        let crop = self.letterbox.detect(&rectified);
        let frame = crop.apply(rectified)?;
        let samples = self.averager.sample(&frame)?;
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        self.smoother
            .update_grid(&mut self.colors, &samples, elapsed_ms)?;
        Ok(TickOutput {
            frame,
            crop,
            samples,
        })
    }

    pub fn colors(&self) -> &ZoneGrid<Color> {
        &self.colors
    }

    pub fn letterbox_state(&self) -> LetterboxState {
        self.letterbox.state()
    }

    pub fn crop(&self) -> CropDecision {
        self.letterbox.current()
    }

    pub fn rectifier(&self) -> &Rectifier {
        &self.rectifier
    }
}
