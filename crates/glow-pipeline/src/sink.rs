use crate::{Color, PipelineError, ZoneGrid};

/// Receives the smoothed zone colors once per tick.
///
/// Implementations own whatever transport drives the lights; see
/// [`zone_area`](crate::zone_area) for the zone-to-space convention.
pub trait LightSink {
    fn render(&mut self, colors: &ZoneGrid<Color>) -> Result<(), PipelineError>;

    /// Called exactly once when the loop ends, whether or not it failed.
    fn shutdown(&mut self) -> Result<(), PipelineError>;
}
