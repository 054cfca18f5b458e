use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::Parser;

use gamutvol::colorspace::ColorSpace;
use gamutvol::gamut::GamutComparison;
use gamutvol::render::{render_comparison, RenderSettings};
use gamutvol::sampler::DEFAULT_STEPS;

#[derive(Parser)]
#[command(
    name = "gamutcompare",
    version,
    about = "Compare the XYZ gamut volumes of two RGB color spaces"
)]
struct Args {
    /// First color space (alexa-wide-gamut, aces-ap0, srgb, display-p3, bt2020)
    #[arg(default_value = "alexa-wide-gamut")]
    first: String,

    /// Second color space
    #[arg(default_value = "aces-ap0")]
    second: String,

    /// Sampling density per RGB cube dimension
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// Output image path
    #[arg(long, short, default_value = "gamut-comparison.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 1200)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Camera elevation in degrees
    #[arg(long, default_value_t = 20.0)]
    elevation: f64,

    /// Camera azimuth in degrees
    #[arg(long, default_value_t = 45.0)]
    azimuth: f64,
}

fn lookup_space(name: &str) -> Result<ColorSpace> {
    ColorSpace::from_named(name)
        .ok_or_else(|| anyhow!("Unknown color space: {}. Expected one of alexa-wide-gamut, aces-ap0, srgb, display-p3, bt2020", name))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.steps < 2 {
        bail!("--steps must be at least 2");
    }

    let first = lookup_space(&args.first)?;
    let second = lookup_space(&args.second)?;

    let comparison = GamutComparison::compare(&first, &second, args.steps);

    for outcome in [&comparison.first, &comparison.second] {
        match outcome {
            Ok(volume) => println!(
                "{}: {} cloud points, hull with {} vertices / {} faces",
                volume.space.name,
                volume.cloud.len(),
                volume.hull.vertex_count(),
                volume.hull.face_count()
            ),
            Err(e) => eprintln!("{}", e),
        }
    }

    if comparison.first.is_err() && comparison.second.is_err() {
        bail!("Both color space pipelines failed, nothing to render");
    }

    let settings = RenderSettings {
        width: args.width,
        height: args.height,
        elevation: args.elevation,
        azimuth: args.azimuth,
        ..RenderSettings::default()
    };
    let img = render_comparison(&comparison, &settings);
    img.save(&args.output)?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
