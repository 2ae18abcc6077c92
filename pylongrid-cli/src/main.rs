mod config;
mod overlay;

use clap::Parser;
use config::Config;
use pylongrid::io::load_gray_image;
use pylongrid::{Detector, Head};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "PylonGrid head detector (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct HeadRecord {
    range: u8,
    center_x: usize,
    center_y: usize,
}

impl From<Head> for HeadRecord {
    fn from(value: Head) -> Self {
        Self {
            range: value.range,
            center_x: value.center_x,
            center_y: value.center_y,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    width: usize,
    height: usize,
    rows: usize,
    cols: usize,
    heads: Vec<HeadRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("pylongrid=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config = Config::from_json(&config_text)?;

    let image = load_gray_image(&config.image_path)?;
    tracing::info!(
        path = %config.image_path,
        width = image.width(),
        height = image.height(),
        "loaded range image"
    );

    let mut detector = Detector::new(image.width(), image.height(), config.detector_config())?;
    let heads = detector.detect(image.view())?;

    if let Some(path) = &config.overlay_path {
        overlay::render(&image, detector.grid(), &heads).save(path)?;
        tracing::info!(path = %path, "wrote debug overlay");
    }

    let grid = detector.grid();
    let output = Output {
        width: image.width(),
        height: image.height(),
        rows: grid.rows(),
        cols: grid.cols(),
        heads: heads.into_iter().map(HeadRecord::from).collect(),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
