//! Shared primitives for the tvglow workspace: small vector and matrix types
//! used by the rectifier, pixel rectangles used for crops and probe windows,
//! and the `log` backends every binary installs at startup.

pub mod logging;
pub mod mat3;
pub mod rect;
pub mod vec2;
pub mod vec3;

pub use logging::{FileLogger, StdoutLogger, default_level, init_file_logger, init_stdout_logger};
pub use mat3::Mat3;
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;

// Re-export log crate so downstream crates can use glow_base::log::*
pub use log;
