use anyhow::Context;
use clap::Parser;
use palette_match::Tolerance;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_debterator::models::{ReportFormat, Settings};
use color_debterator::services::{self, RunOptions};

/// Environment variable naming a settings file when `--config` is not given
const CONFIG_ENV: &str = "DEBTERATOR_CONFIG";

#[derive(Parser)]
#[command(name = "color-debterator")]
#[command(
    about = "Replace literal colors in an Android resources file with references to the closest target palette colors"
)]
struct Cli {
    /// Resources file to rewrite
    input: PathBuf,

    /// Resources file holding the target palette
    target: PathBuf,

    /// Maximum CIEDE2000 distance for a replacement (overrides the config file)
    tolerance: Option<Tolerance>,

    /// YAML settings file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Report replacements without writing the input file
    #[arg(long)]
    dry_run: bool,

    /// Print the match table as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_debterator=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let settings = config_path
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();

    let options = RunOptions {
        tolerance: settings.resolve_tolerance(cli.tolerance)?,
        dry_run: cli.dry_run || settings.dry_run,
    };
    let report = if cli.json {
        ReportFormat::Json
    } else {
        settings.report
    };

    let summary = services::run(&cli.input, &cli.target, &options).with_context(|| {
        format!(
            "Failed to rewrite {} against {}",
            cli.input.display(),
            cli.target.display()
        )
    })?;

    if report == ReportFormat::Json {
        let json = services::rows_to_json(&summary.rows).context("Failed to encode match table")?;
        println!("{}", json);
    }

    eprintln!("{}", summary.before.describe("Original input"));
    eprintln!("{}", summary.after.describe("Updated file"));
    eprintln!("color-debterator kill stats: {}%", summary.kill_rate);

    Ok(())
}
