// Author: Dustin Pilgrim
// License: MIT

//! Batch conversion: one directory of YAML files in, one directory of C
//! headers out. A failure on one file is reported and counted but never
//! stops the rest of the batch.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream, Style};

use crate::error::DefgenError;
use crate::export;
use crate::parser;

/// Input extensions recognized by the directory scan.
const INPUT_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Counts for one [`process_folder`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Convert a single YAML file to a C header.
///
/// # Errors
/// Returns [`DefgenError::FileError`] if the input cannot be read or the
/// output cannot be created or written, and [`DefgenError::ParseError`]
/// (with the input path attached) if the YAML is malformed.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), DefgenError> {
    let text = fs::read_to_string(input).map_err(|e| DefgenError::FileError {
        message: format!("Failed to read file: {}", e),
        path: input.display().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
    })?;

    let doc = parser::parse_document(&text).map_err(|e| e.with_path(input))?;

    let file = fs::File::create(output).map_err(|e| DefgenError::FileError {
        message: format!("Failed to create file: {}", e),
        path: output.display().to_string(),
        hint: Some("Check that the output directory exists and is writable".into()),
    })?;
    let mut writer = BufWriter::new(file);
    export::write_header(&doc, &mut writer).map_err(|e| write_error(e, output))?;
    writer.flush().map_err(|e| write_error(e, output))?;

    Ok(())
}

/// Convert every `.yaml`/`.yml` file in `input_dir` to a `.h` file of the
/// same stem in `output_dir`, creating `output_dir` if needed.
///
/// Files are processed sequentially, in name order. Per-file failures are
/// logged to stderr and tallied in the returned summary.
///
/// # Errors
/// Returns [`DefgenError::FileError`] only if `output_dir` cannot be
/// created or `input_dir` cannot be listed.
pub fn process_folder(input_dir: &Path, output_dir: &Path) -> Result<BatchSummary, DefgenError> {
    fs::create_dir_all(output_dir).map_err(|e| DefgenError::FileError {
        message: format!("Failed to create output directory: {}", e),
        path: output_dir.display().to_string(),
        hint: None,
    })?;

    let entries = fs::read_dir(input_dir).map_err(|e| DefgenError::FileError {
        message: format!("Failed to read directory: {}", e),
        path: input_dir.display().to_string(),
        hint: Some("Check that the input directory exists".into()),
    })?;

    let mut inputs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| has_input_extension(path))
        .collect();
    inputs.sort();

    let mut summary = BatchSummary::default();
    for input in inputs {
        let output = output_dir.join(header_name(&input));
        println!(
            "{} {} -> {}",
            "Processing".if_supports_color(Stream::Stdout, |t| t.green()),
            input.display(),
            output.display()
        );
        match convert_file(&input, &output) {
            Ok(()) => summary.converted += 1,
            Err(e) => {
                eprintln!(
                    "{} {}",
                    "Failed:".if_supports_color(Stream::Stderr, |t| {
                        t.style(Style::new().red().bold())
                    }),
                    e
                );
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| INPUT_EXTENSIONS.contains(&ext))
}

// Only the final extension is replaced: `fcvt.d.q.yaml` -> `fcvt.d.q.h`.
fn header_name(input: &Path) -> PathBuf {
    let mut name = PathBuf::from(input.file_name().unwrap_or_default());
    name.set_extension("h");
    name
}

fn write_error(e: io::Error, path: &Path) -> DefgenError {
    DefgenError::FileError {
        message: format!("Failed to write file: {}", e),
        path: path.display().to_string(),
        hint: None,
    }
}
