use clap::{Parser, ValueEnum};
use maskmatch::io::image_search;
use maskmatch::{BackgroundFallback, MatchConfig, MatchMode, MatchRect, MatchReport};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find every occurrence of a mask in an image and outline it in red"
)]
struct Cli {
    /// Image to search in.
    main_image: PathBuf,
    /// Mask (or literal sub-image) to search for.
    mask_image: PathBuf,
    /// Where to write the main image with the matches outlined.
    output_image: PathBuf,
    /// `true` treats the search image as a mask; any other value searches for
    /// it as a literal sub-image.
    #[arg(default_value = "true")]
    is_mask: String,
    /// Percentage of window pixels that must classify correctly.
    #[arg(default_value_t = 75, value_parser = clap::value_parser!(u32).range(0..=100))]
    match_percent: u32,
    /// Per-channel difference below which two pixels share a shade.
    #[arg(default_value_t = 32)]
    tolerance: u32,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
    /// Scan on the calling thread only.
    #[arg(long)]
    sequential: bool,
    /// Background to use when the mask has no marker (black) pixel.
    #[arg(long, value_enum, default_value_t = FallbackArg::ImageMean)]
    empty_background: FallbackArg,
    /// Enable tracing output on stderr.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FallbackArg {
    ImageMean,
    Reject,
}

impl From<FallbackArg> for BackgroundFallback {
    fn from(value: FallbackArg) -> Self {
        match value {
            FallbackArg::ImageMean => BackgroundFallback::ImageMean,
            FallbackArg::Reject => BackgroundFallback::Reject,
        }
    }
}

#[derive(Debug, Serialize)]
struct RectRecord {
    row1: usize,
    col1: usize,
    row2: usize,
    col2: usize,
}

impl From<&MatchRect> for RectRecord {
    fn from(value: &MatchRect) -> Self {
        Self {
            row1: value.row1,
            col1: value.col1,
            row2: value.row2,
            col2: value.col2,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    matches: Vec<RectRecord>,
    count: usize,
    window_width: usize,
    window_height: usize,
    windows_scanned: u64,
}

impl From<&MatchReport> for Output {
    fn from(value: &MatchReport) -> Self {
        Self {
            matches: value.matches.iter().map(RectRecord::from).collect(),
            count: value.count(),
            window_width: value.window_width,
            window_height: value.window_height,
            windows_scanned: value.windows_scanned,
        }
    }
}

/// Only the exact string `true` selects mask mode.
fn match_mode(flag: &str) -> MatchMode {
    if flag == "true" {
        MatchMode::Mask
    } else {
        MatchMode::SubImage
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            if err.use_stderr() {
                process::exit(1);
            }
            return Ok(());
        }
    };

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("maskmatch=info".parse()?))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let cfg = MatchConfig {
        mode: match_mode(&cli.is_mask),
        match_percent: cli.match_percent,
        tolerance: cli.tolerance,
        parallel: !cli.sequential,
        background_fallback: cli.empty_background.into(),
    };
    tracing::debug!(?cfg, "starting search");

    let report = image_search(&cli.main_image, &cli.mask_image, &cli.output_image, &cfg)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&Output::from(&report))?);
    } else {
        println!("{report}");
    }
    Ok(())
}
