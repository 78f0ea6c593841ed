use crate::{Color, PipelineError, ZoneGrid};

/// Default time constant of the moving average, in milliseconds.
pub const WINDOW_MS: f64 = 300.0;

/// Exponentially damped blend of `previous` towards `sample`.
///
/// The weight of `previous` decays as `exp(-elapsed_ms / window_ms)`, so the
/// perceived transition speed does not depend on the tick rate. Negative
/// elapsed times count as zero.
pub fn moving_average(previous: f64, sample: f64, elapsed_ms: f64, window_ms: f64) -> f64 {
    let scale = (-elapsed_ms.max(0.0) / window_ms).exp();
    previous * scale + sample * (1.0 - scale)
}

/// Per-channel, time-weighted exponential moving average.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemporalSmoother {
    window_ms: f64,
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self::new(WINDOW_MS)
    }
}

impl TemporalSmoother {
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms }
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    pub fn update_channel(
        &self,
        previous: f64,
        sample: f64,
        elapsed_ms: f64,
    ) -> Result<f64, PipelineError> {
        check_elapsed(elapsed_ms)?;
        Ok(moving_average(previous, sample, elapsed_ms, self.window_ms))
    }

    pub fn update(
        &self,
        previous: Color,
        sample: Color,
        elapsed_ms: f64,
    ) -> Result<Color, PipelineError> {
        check_elapsed(elapsed_ms)?;
        Ok(previous.zip_with(sample, |p, s| {
            moving_average(p, s, elapsed_ms, self.window_ms)
        }))
    }

    /// Blend every zone of `colors` towards `samples`.
    ///
    /// Either all zones update or, on error, none do.
    pub fn update_grid(
        &self,
        colors: &mut ZoneGrid<Color>,
        samples: &ZoneGrid<Color>,
        elapsed_ms: f64,
    ) -> Result<(), PipelineError> {
        check_elapsed(elapsed_ms)?;
        if !colors.same_shape(samples) {
            return Err(PipelineError::InvalidConfig(format!(
                "zone grid is {}x{} but samples are {}x{}",
                colors.rows(),
                colors.cols(),
                samples.rows(),
                samples.cols()
            )));
        }
        for (color, sample) in colors.values_mut().iter_mut().zip(samples.values()) {
            *color = color.zip_with(*sample, |p, s| {
                moving_average(p, s, elapsed_ms, self.window_ms)
            });
        }
        Ok(())
    }
}

fn check_elapsed(elapsed_ms: f64) -> Result<(), PipelineError> {
    if elapsed_ms.is_finite() && elapsed_ms >= 0.0 {
        Ok(())
    } else {
        Err(PipelineError::InvalidElapsedTime(elapsed_ms))
    }
}
