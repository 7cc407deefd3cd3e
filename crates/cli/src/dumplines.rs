//! dumplines - Inspect a recognition dump
//!
//! A command line tool for dumping a recognition result in reading order,
//! with the vertical gap before each line and the paragraph gap threshold
//! the reflow would use. Useful for tuning --gap-ratio.

use passage_core::error::{PassageError, Result};
use passage_core::layout::{line_gaps, paragraph_gap_threshold, reading_order};
use passage_core::recognize::{RecognizedLine, lines_from_json, lines_to_json};
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// A command line tool for inspecting recognition dumps.
#[derive(Parser, Debug)]
#[command(name = "dumplines")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// One or more paths to recognition dump files (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Paragraph gap ratio used when reporting the threshold
    #[arg(
        short = 'G',
        long = "gap-ratio",
        default_value = "1.6",
        allow_negative_numbers = true
    )]
    gap_ratio: f64,

    /// Re-emit the dump as normalized JSON in reading order instead of
    /// the annotated listing
    #[arg(short = 'j', long, action = ArgAction::SetTrue)]
    json: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

/// Validate the gap ratio from command line arguments.
fn check_gap_ratio(args: &Args) -> Result<f64> {
    if !args.gap_ratio.is_finite() || args.gap_ratio <= 0.0 {
        return Err(PassageError::InvalidArgument(format!(
            "gap-ratio must be a finite number greater than zero, got {}",
            args.gap_ratio
        )));
    }

    Ok(args.gap_ratio)
}

/// Write the annotated listing for one dump.
fn dump_listing<W: Write>(out: &mut W, lines: &[RecognizedLine], gap_ratio: f64) -> Result<()> {
    let sorted = reading_order(lines);
    let gaps = line_gaps(&sorted);

    match paragraph_gap_threshold(&gaps, gap_ratio) {
        Some(threshold) => writeln!(
            out,
            "{} lines, paragraph gap threshold {:.4}",
            sorted.len(),
            threshold
        )?,
        None => writeln!(out, "{} lines, no usable gap threshold", sorted.len())?,
    }

    for (index, line) in sorted.iter().enumerate() {
        if index == 0 {
            writeln!(out, "  min_y={:.4}           {:?}", line.min_y, line.text)?;
        } else {
            writeln!(
                out,
                "  min_y={:.4} gap={:.4} {:?}",
                line.min_y,
                gaps[index - 1],
                line.text
            )?;
        }
    }

    Ok(())
}

/// Write one dump back out as normalized JSON in reading order.
fn dump_json<W: Write>(out: &mut W, lines: &[RecognizedLine]) -> Result<()> {
    let sorted: Vec<RecognizedLine> = reading_order(lines).into_iter().cloned().collect();
    writeln!(out, "{}", lines_to_json(&sorted)?)?;
    Ok(())
}

fn process_file<W: Write>(path: &PathBuf, out: &mut W, args: &Args) -> Result<()> {
    let data = std::fs::read(path)?;
    let lines = lines_from_json(&data)?;

    if args.json {
        dump_json(out, &lines)
    } else {
        dump_listing(out, &lines, args.gap_ratio)
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Err(e) = check_gap_ratio(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            std::process::exit(1);
        }

        if let Err(e) = process_file(path, &mut output, &args) {
            eprintln!("Error processing {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(ratio: &str) -> Args {
        Args::try_parse_from(["dumplines", "-G", ratio, "lines.json"]).unwrap()
    }

    #[test]
    fn rejects_non_positive_or_non_finite_gap_ratio() {
        assert!(check_gap_ratio(&parse("0")).is_err());
        assert!(check_gap_ratio(&parse("-1.6")).is_err());
        assert!(check_gap_ratio(&parse("NaN")).is_err());
        assert_eq!(check_gap_ratio(&parse("1.6")).unwrap(), 1.6);
    }
}
