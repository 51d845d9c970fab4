//! defgen - generate C `#define` headers from YAML configuration files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use owo_colors::{OwoColorize, Stream, Style};

use defgen::batch;

/// Convert a directory of YAML files into C headers of `#define`s.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Directory containing .yaml/.yml input files
    #[arg(value_hint = clap::ValueHint::DirPath)]
    input_dir: PathBuf,

    /// Directory where generated .h files are written (created if absent)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    output_dir: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    color: ColorChoice,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if !cli.input_dir.is_dir() {
        eprintln!(
            "{} {} is not a directory.",
            "Error:".if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
            cli.input_dir.display()
        );
        return Ok(ExitCode::FAILURE);
    }

    let summary = batch::process_folder(&cli.input_dir, &cli.output_dir)
        .with_context(|| format!("Failed to process {}", cli.input_dir.display()))?;

    if summary.failed > 0 {
        eprintln!(
            "{} {} of {} file(s) failed to convert.",
            "Error:".if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
            summary.failed,
            summary.converted + summary.failed
        );
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
