pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod display;
pub mod error;
pub mod loaders;
pub mod math;
pub mod traits;

pub use config::RenderConfig;
pub use crate::core::{Flip, Image, PixelBuffer, RenderContext};
pub use display::Display;
pub use error::{RenderError, Result};

/// Crate version, logged at startup
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
