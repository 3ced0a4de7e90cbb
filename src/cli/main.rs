use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use stock_meta::config::{Config, Overrides};
use stock_meta::export::{self, ExportFormat, RecommendedFormat};
use stock_meta::generate::MetadataRecord;
use stock_meta::pipeline;
use stock_meta::settings::{ImageType, Platform};

#[derive(Parser, Debug)]
#[command(
    name = "stock-meta",
    version,
    about = "Microstock metadata generator: titles, descriptions, keywords, and AI prompts exported as platform CSV or JSON"
)]
struct Cli {
    /// Media files or directories to process
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Path to config file (default: config.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config.json and exit
    #[arg(long)]
    init: bool,

    /// Treat PATH arguments as bare filenames without reading the filesystem
    #[arg(long)]
    names: bool,

    /// Re-export a JSON record collection instead of generating
    #[arg(long, value_name = "FILE", conflicts_with = "paths")]
    records: Option<PathBuf>,

    /// Export format (default: recommended for the batch)
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Target platform: all, adobe, shutterstock, freepik, vecteezy, pond5
    #[arg(short, long)]
    platform: Option<String>,

    /// Asset type: photo, vector, illustration, raster, video, mixed
    #[arg(long)]
    image_type: Option<String>,

    /// Maximum title length
    #[arg(long, value_name = "CHARS")]
    title_length: Option<usize>,

    /// Maximum number of keywords
    #[arg(long, value_name = "COUNT")]
    keywords: Option<usize>,

    /// Keywords to exclude, separated by `,` or `;`
    #[arg(long, value_name = "LIST")]
    negative_keywords: Option<String>,

    /// Skip AI prompt generation
    #[arg(long)]
    no_prompt: bool,

    /// Print the recommended export format and exit
    #[arg(long)]
    recommend: bool,

    /// Write the export into this directory instead of stdout
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the export
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --init
    if cli.init {
        let config = Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply(&overrides(&cli));

    let records = match cli.records {
        Some(ref path) => load_records(path)?,
        None => {
            let names = pipeline::input_names(&cli.paths, cli.names)?;

            // Handle --recommend
            if cli.recommend {
                println!("{}", export::recommended_format(&names).as_str());
                return Ok(());
            }

            log::info!("Found {} file(s) to process", names.len());
            pipeline::generate_batch(&names, &config.generation, config.export.include_prompts)
        }
    };

    let names: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
    let recommended = export::recommended_format(&names);
    if cli.recommend {
        println!("{}", recommended.as_str());
        return Ok(());
    }

    let format = ExportFormat::resolve(
        config.export.format,
        recommended,
        config.generation.image_type,
    );
    log_choice(format, recommended, config.generation.platform);

    let export = export::export_records(&records, format, config.generation.platform)?;

    match config.export.output_dir {
        Some(ref dir) => {
            let path = pipeline::save_export(&export, Path::new(dir))?;
            println!("{}", path.display());
        }
        None => println!("{}", export.body),
    }

    log::info!("Done: {} record(s) exported", records.len());
    Ok(())
}

/// Command-line flags that take precedence over the config file.
fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        platform: cli.platform.as_deref().map(Platform::from_name),
        image_type: cli.image_type.as_deref().map(ImageType::from_name),
        title_length: cli.title_length,
        keywords_count: cli.keywords,
        negative_keywords_text: cli.negative_keywords.clone(),
        format: cli.format,
        no_prompt: cli.no_prompt,
        output_dir: cli.output.clone(),
    }
}

fn load_records(path: &Path) -> Result<Vec<MetadataRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = export::parse_structured(&text)?;
    log::info!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

fn log_choice(format: ExportFormat, recommended: RecommendedFormat, platform: Platform) {
    log::info!(
        "Exporting {} for {} (batch looks {})",
        format.extension(),
        platform.as_str(),
        recommended.as_str()
    );
}
