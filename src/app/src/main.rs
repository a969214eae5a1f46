use anyhow::Context;
use clap::Parser;
use colormatch::{ColorMatch, Image, Method, Mode};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "colormatch-cli")]
#[command(about = "Transfer the color statistics of a reference image onto a source image")]
struct Cli {
    /// Source image path
    source: PathBuf,

    /// Reference image path
    reference: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "./output.png")]
    output: PathBuf,

    /// hm, reinhard, mvgd, mkl, hm-mvgd-hm or hm-mkl-hm
    #[arg(short, long, default_value = "mkl")]
    method: Method,

    /// rgb or lab
    #[arg(long, default_value = "rgb")]
    mode: Mode,

    /// Blend strength in percent, 0 keeps the source
    #[arg(short, long, default_value_t = 100.0)]
    strength: f64,
}

fn load(path: &PathBuf) -> anyhow::Result<Image> {
    let rgb = image::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Image::new(width, height, rgb.into_raw())?)
}

/// `(1 - s) * source + s * matched`
fn blend(source: &Image, matched: &Image, strength: f64) -> anyhow::Result<Image> {
    let s = (strength / 100.0).clamp(0.0, 1.0);
    let data = source
        .as_slice()
        .iter()
        .zip(matched.as_slice().iter())
        .map(|(&a, &b)| colormatch::quantize((1.0 - s) * a as f64 + s * b as f64))
        .collect();
    Ok(Image::new(source.width(), source.height(), data)?)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = load(&cli.source)?;
    let reference = load(&cli.reference)?;

    let start_time = Instant::now();
    let matched = ColorMatch::new(cli.method, cli.mode).run(&source, &reference);
    tracing::info!(elapsed = ?start_time.elapsed(), method = %cli.method, mode = %cli.mode, "matched");

    let output = if cli.strength >= 100.0 {
        matched
    } else {
        blend(&source, &matched, cli.strength)?
    };

    image::save_buffer(
        &cli.output,
        output.as_slice(),
        output.width(),
        output.height(),
        image::ExtendedColorType::Rgb8,
    )
    .with_context(|| format!("failed to save {}", cli.output.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colormatch=warn,colormatch_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err:#}");
        return ExitCode::from(1);
    }
    if !cli.output.exists() {
        eprintln!("failed to save {}", cli.output.display());
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
