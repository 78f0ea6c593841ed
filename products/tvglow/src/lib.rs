pub mod config;
pub mod shutdown;
pub mod sink;

pub use config::{AppConfig, ConfigError};
pub use sink::LogSink;
