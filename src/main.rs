use std::{path::PathBuf, process::ExitCode};

use circle_image::{
    engine::{
        assets::{AssetError, Assets},
        input::TouchEvent,
        ui::{Context, Frame, Padding, Size},
    },
    renderer::{Color, SoftwareCanvas},
    widget::{
        CircleImageConfig, CircleImageView, ConfigError, ImageSource, config::parse_color,
    },
};
use clap::Parser;
use tracing::{error, info};

#[derive(clap::Parser)]
struct Opts {
    /// Image to display, as a path or a `file://` uri.
    image: String,

    /// Where to write the rendered frame (PNG).
    #[arg(short, long, default_value = "circle.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 200)]
    width: i32,

    #[arg(long, default_value_t = 200)]
    height: i32,

    /// Padding on all four sides of the view.
    #[arg(long, default_value_t = 0)]
    padding: i32,

    /// Attribute file holding the view's declarative configuration.
    #[arg(long)]
    attributes: Option<PathBuf>,

    /// Pixels per dp when reading dimensions from the attribute file.
    #[arg(long, default_value_t = 1.0)]
    density: f32,

    #[arg(long, value_parser = color_arg)]
    stroke_color: Option<Color>,

    #[arg(long)]
    stroke_width: Option<f32>,

    #[arg(long, value_parser = color_arg)]
    highlight_color: Option<Color>,

    #[arg(long)]
    no_highlight: bool,

    /// Press the view at "X,Y" before rendering.
    #[arg(long, value_parser = point_arg)]
    press: Option<(f32, f32)>,

    /// Color behind the view.
    #[arg(long, value_parser = color_arg, default_value = "white")]
    background: Color,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Attribute error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not write output: {0}")]
    Output(#[from] image::ImageError),
}

fn color_arg(value: &str) -> Result<Color, String> {
    parse_color(value).ok_or_else(|| format!("invalid color \"{value}\""))
}

fn point_arg(value: &str) -> Result<(f32, f32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got \"{value}\""))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x \"{x}\""))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y \"{y}\""))?;
    Ok((x, y))
}

fn run(opts: Opts) -> Result<(), DemoError> {
    let assets = Assets::from_dir(".");

    let config = match opts.attributes {
        Some(ref path) => {
            let text = assets.load_config_file(path)?;
            CircleImageConfig::from_attributes(&text, opts.density)?
        }
        None => CircleImageConfig::default(),
    };

    let mut view = CircleImageView::new(config);

    // Command line flags override the attribute file.
    if let Some(color) = opts.stroke_color {
        view.set_stroke_color(color);
    }
    if let Some(width) = opts.stroke_width {
        view.set_stroke_width(width);
    }
    if let Some(color) = opts.highlight_color {
        view.set_highlight_color(color);
    }
    if opts.no_highlight {
        view.set_highlight_enable(false);
    }
    view.set_on_click(|| info!("Circle clicked"));

    let mut context = Context::new(view);
    context.resize(Frame::new(
        Size::new(opts.width, opts.height),
        Padding::uniform(opts.padding),
    ));
    context
        .widget_mut()
        .set_image_source(ImageSource::Uri(opts.image.clone()), &assets);

    if let Some((x, y)) = opts.press {
        let accepted = context.dispatch(&TouchEvent::down(x, y));
        info!("Press at ({}, {}) accepted: {}", x, y, accepted);
    }

    let mut canvas = SoftwareCanvas::with_background(
        opts.width.max(0) as u32,
        opts.height.max(0) as u32,
        opts.background,
    );
    context.render(&mut canvas);
    canvas.into_image().save(&opts.output)?;

    info!("Rendered {} to {}", opts.image, opts.output.display());

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    let opts = Opts::parse();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
