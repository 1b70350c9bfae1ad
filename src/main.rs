use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use soft_renderer::cli::Cli;
use soft_renderer::config::RenderConfig;
use soft_renderer::core::{Flip, PngPresenter};
use soft_renderer::demo::draw_frame;
use soft_renderer::loaders::load_image_or_empty;
use soft_renderer::{Display, VERSION};

fn init_logging(config: &RenderConfig) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()));
    if config.quiet {
        builder.filter_level(LevelFilter::Off);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RenderConfig::from_json_file(path)?,
        None => RenderConfig::default(),
    };
    let config = cli.apply(config);

    init_logging(&config);
    info!("Soft renderer v{}", VERSION);

    let presenter = PngPresenter::new(&cli.output, config.width, config.height);
    let mut display = Display::new(&config, presenter).context("Failed to initialize renderer")?;

    // A missing or broken image still renders the rest of the frame
    let image = cli.image.as_ref().map(|path| load_image_or_empty(path));
    let flip: Flip = cli.flip.parse().unwrap_or_default();
    let clear = config.clear_color();

    for _ in 0..cli.frames {
        let frame = display.frame_number();
        display.frame(|ctx| draw_frame(ctx, clear, frame, image.as_ref().map(|img| (img, flip))))?;
    }

    info!(
        "Rendered {} frame(s) to {:?}",
        display.frame_number(),
        display.presenter().path()
    );

    Ok(())
}
