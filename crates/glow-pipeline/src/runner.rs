use crate::{Diagnostics, LightSink, Pipeline, PipelineConfig, PipelineError};
use glow_camera::FrameSource;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Drives the fetch, process, render loop until asked to stop.
///
/// The shutdown flag is checked between ticks, never during one. Whatever
/// ends the loop, the sink is shut down before `run` returns.
pub struct Runner<S, K> {
    source: S,
    sink: K,
    pipeline: Pipeline,
    diagnostics: Diagnostics,
    shutdown: Arc<AtomicBool>,
}

impl<S: FrameSource, K: LightSink> Runner<S, K> {
    pub fn new(config: &PipelineConfig, source: S, sink: K) -> Result<Self, PipelineError> {
        Ok(Self {
            source,
            sink,
            pipeline: Pipeline::new(config)?,
            diagnostics: Diagnostics::new(config.diagnostics().clone()),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Handle for requesting an orderly stop, e.g. from a signal task.
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    pub fn with_shutdown(mut self, shutdown: Arc<AtomicBool>) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Loop until shutdown is requested or a stage fails.
    ///
    /// Returns the number of completed ticks. A loop error takes precedence
    /// over a sink shutdown error.
    pub async fn run(mut self) -> Result<u64, PipelineError> {
        let result = self.run_ticks().await;
        if let Err(err) = &result {
            log::error!("pipeline stopped: {err}");
        }

        log::info!("shutting down light sink");
        let closed = self.sink.shutdown();
        if let Err(err) = &closed {
            log::error!("light sink shutdown failed: {err}");
        }
        result.and_then(|ticks| closed.map(|()| ticks))
    }

    async fn run_ticks(&mut self) -> Result<u64, PipelineError> {
        let mut last_update = Instant::now();
        let mut ticks = 0u64;
        while !self.shutdown.load(Ordering::Acquire) {
            let started = Instant::now();
            let raw = self.source.fetch().await?;

            let now = Instant::now();
            let output = self.pipeline.process(&raw, now.duration_since(last_update))?;
            last_update = now;

            self.sink.render(self.pipeline.colors())?;
            ticks += 1;

            self.diagnostics.record(
                started.elapsed(),
                &raw,
                &output.frame,
                output.crop,
                self.pipeline.colors(),
            );

            // lets a signal task on the same thread get to the flag
            tokio::task::yield_now().await;
        }
        log::info!("shutdown requested after {ticks} ticks");
        Ok(ticks)
    }
}
