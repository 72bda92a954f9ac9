//! Heatmap command-line renderer.
//!
//! Renders a point set to a PNG heatmap, or previews a color scheme:
//! - `heatmap render --points points.csv --output map.png`
//! - `heatmap render --random 500 --seed 7 --output map.png`
//! - `heatmap scheme --scheme classic --output classic.png`

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use heatmap_cli::{load_points, random_points, SchemeSource};
use heatmap_common::scheme::DEFAULT_SCHEME;
use heatmap_renderer::{render_ramp_preview, render_with_options, write_png, RenderOptions};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Render point density heatmaps to PNG")]
struct Args {
    /// Log level
    #[arg(long, env = "HEATMAP_LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a heatmap of a point set
    Render {
        /// Points file (.json, otherwise `x,y` lines)
        #[arg(long, conflicts_with = "random")]
        points: Option<PathBuf>,

        /// Generate this many random points instead of reading a file
        #[arg(long)]
        random: Option<usize>,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Canvas width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value = "600")]
        height: u32,

        /// Stamp diameter in pixels
        #[arg(long, default_value = "50")]
        dot_size: u32,

        /// Global opacity (0-255)
        #[arg(long, default_value = "128")]
        opacity: u8,

        /// Built-in scheme name or path to a JSON/YAML scheme file
        #[arg(long, default_value = DEFAULT_SCHEME)]
        scheme: SchemeSource,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render a preview strip of a color scheme
    Scheme {
        /// Built-in scheme name or path to a JSON/YAML scheme file
        #[arg(long, default_value = DEFAULT_SCHEME)]
        scheme: SchemeSource,

        /// Preview width in pixels
        #[arg(long, default_value = "32")]
        width: u32,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    match args.command {
        Command::Render {
            points,
            random,
            seed,
            width,
            height,
            dot_size,
            opacity,
            scheme,
            output,
        } => {
            let points = match (points, random) {
                (Some(path), _) => load_points(&path)?,
                (None, Some(count)) => random_points(count, width, height, seed),
                (None, None) => bail!("either --points or --random is required"),
            };

            let spec = scheme.load()?;
            let ramp = spec.build();
            let options = RenderOptions { dot_size, opacity };

            info!(
                points = points.len(),
                width,
                height,
                dot_size,
                opacity,
                scheme = %spec.name,
                "Rendering heatmap"
            );

            let started = Instant::now();
            let image = render_with_options(width, height, &points, &options, &ramp)
                .context("Render failed")?;
            write_png(&output, &image)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!(
                output = %output.display(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Heatmap written"
            );
        }
        Command::Scheme {
            scheme,
            width,
            output,
        } => {
            let spec = scheme.load()?;
            let ramp = spec.build();
            let image = render_ramp_preview(&ramp, width).context("Preview failed")?;
            write_png(&output, &image)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            info!(
                scheme = %spec.name,
                colors = ramp.len(),
                output = %output.display(),
                "Scheme preview written"
            );
        }
    }

    Ok(())
}
