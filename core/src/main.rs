use clap::Parser;
use labscan_core::cli::{Cli, OutputFormat};
use labscan_core::{
    lines_from_json, LabReportAnalyzer, LabscanError, OcrText, Result, TextReport,
};
use log::info;
use std::process;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.borderline.is_finite() || cli.borderline < 0.0 {
        return Err(format!(
            "borderline percentage must be a non-negative number, got {}",
            cli.borderline
        )
        .into());
    }

    let content = std::fs::read_to_string(&cli.file)?;
    let text = if cli.json_input {
        OcrText::from_lines(lines_from_json(&content))
    } else {
        OcrText::from_joined(&content)
    };
    info!(
        "Scanning {} OCR lines from {}",
        text.lines().len(),
        cli.file.display()
    );

    let analyzer = LabReportAnalyzer::new().with_borderline_pct(cli.borderline);
    let report = analyzer.analyze(&text);
    info!("Recognized {} test values", report.results.len());

    match cli.format {
        OutputFormat::Text => println!("{}", TextReport::new(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}
