mod report;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use natal_core::aspects::AspectFilter;
use natal_core::western::RulershipScheme;
use natal_core::{ChartEngine, ChartInput};
use std::io::Read;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Human-readable sections.
    Table,
    /// Full analysis as pretty-printed JSON.
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rulership {
    Traditional,
    Modern,
}

impl From<Rulership> for RulershipScheme {
    fn from(value: Rulership) -> Self {
        match value {
            Rulership::Traditional => RulershipScheme::Traditional,
            Rulership::Modern => RulershipScheme::Modern,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Chart JSON file (bodies, ascendant, midheaven, optional cusps). Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Engine config TOML. Defaults to `configs/natal.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only report the five major aspects.
    #[arg(long, default_value_t = false)]
    major_only: bool,

    /// Override the rulership scheme from the config.
    #[arg(long, value_enum)]
    rulership: Option<Rulership>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read chart {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read chart from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => natal_config::load_engine_settings_from_path(path)?,
        None => natal_config::load_engine_settings()?,
    };
    if args.major_only {
        settings.aspects.filter = AspectFilter::MajorOnly;
    }
    if let Some(rulership) = args.rulership {
        settings.rulership = rulership.into();
    }

    let text = read_input(args.input.as_ref())?;
    let input = ChartInput::from_json(&text)?;
    let analysis = ChartEngine::new(settings).analyze(&input)?;
    log::info!(
        "{} aspects, {} angle aspects, {} patterns",
        analysis.aspects.len(),
        analysis.angle_aspects.len(),
        analysis.patterns.total()
    );

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        Format::Table => print!("{}", report::Report(&analysis)),
    }
    Ok(())
}
