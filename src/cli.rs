// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::RenderConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "soft-renderer")]
#[command(about = "Software rasterizer demo: draws a scene and presents it to a PNG", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where the presented frame is written
    #[arg(short, long, default_value = "frame.png")]
    pub output: PathBuf,

    /// Display width
    #[arg(long)]
    pub width: Option<u32>,

    /// Display height
    #[arg(long)]
    pub height: Option<u32>,

    /// Disable alpha blending
    #[arg(long = "no-blend", default_value = "false")]
    pub no_blend: bool,

    /// Image to blit at the center of the frame
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Flip mode for the image: none, horizontal, vertical, both
    #[arg(long, default_value = "none")]
    pub flip: String,

    /// Number of frames to render
    #[arg(long, default_value = "1")]
    pub frames: u32,

    /// Disable logging
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.no_blend {
            config.alpha_blending = false;
        }
        if self.quiet {
            config.quiet = true;
        }
        config
    }
}
