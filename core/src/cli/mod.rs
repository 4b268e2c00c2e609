pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for labscan
#[derive(Parser, Debug)]
#[command(name = "labscan")]
#[command(about = "Lab report OCR value normalization and classification tool")]
#[command(version)]
pub struct Cli {
    /// Path to a text file of OCR lines
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat the input file as a raw OCR service JSON response
    #[arg(long)]
    pub json_input: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Borderline band width as a percentage of the reference interval
    #[arg(short, long, default_value_t = 5.0)]
    pub borderline: f64,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
