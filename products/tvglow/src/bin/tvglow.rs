use glow_base::{default_level, init_file_logger, init_stdout_logger, log_fatal};
use glow_camera::{RetryingSource, V4l2Camera};
use glow_pipeline::Runner;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tvglow::shutdown::{Termination, termination};
use tvglow::{AppConfig, LogSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        init_stdout_logger(default_level());
        log_fatal!("Usage: {} [config.json]", args[0]);
    }

    let config = match args.get(1) {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            init_stdout_logger(default_level());
            log_fatal!("{err}");
        }
    };

    let level = config.level()?;
    match &config.log_dir {
        Some(dir) => init_file_logger(dir, level)?,
        None => init_stdout_logger(level),
    }

    let camera_config = config.camera.clone();
    log::info!(
        "opening {} at {}x{}",
        camera_config.device(),
        camera_config.width(),
        camera_config.height()
    );
    let camera = match V4l2Camera::new(camera_config.clone()) {
        Ok(camera) => camera,
        Err(err) => log_fatal!("{err}"),
    };
    let source = RetryingSource::new(
        camera,
        camera_config.max_consecutive_failures(),
        camera_config.retry_backoff(),
    );

    let sink = LogSink::new(config.pipeline.zone_rows(), config.pipeline.zone_cols());
    let shutdown = Arc::new(AtomicBool::new(false));
    let runner = Runner::new(&config.pipeline, source, sink)?.with_shutdown(shutdown.clone());

    tokio::spawn(async move {
        match termination().await {
            Termination::Interrupt => log::info!("interrupted"),
            Termination::Terminate => log::info!("terminated"),
        }
        shutdown.store(true, Ordering::Release);
    });

    let ticks = runner.run().await?;
    log::info!("stopped after {ticks} ticks");
    Ok(())
}
