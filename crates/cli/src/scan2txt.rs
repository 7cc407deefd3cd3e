//! scan2txt - Reconstruct paragraph text from recognition dumps
//!
//! A command line tool that turns the flat line list emitted by a text
//! recognition pass (a JSON dump of `{"text", "min_y"}` objects) into
//! paragraph-structured prose, and optionally files the result as a quote
//! in a library file.

use passage_core::error::{PassageError, Result};
use passage_core::high_level::extract_text;
use passage_core::layout::ReflowParams;
use passage_core::model::Library;
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// A command line tool for reconstructing paragraph text from recognition
/// dumps and optionally filing it as a book quote.
#[derive(Parser, Debug)]
#[command(name = "scan2txt")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// One or more paths to recognition dump files (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Reflow options ===
    /// Paragraph gap ratio (relative to the median line gap)
    #[arg(short = 'G', long = "gap-ratio", default_value = "1.6")]
    gap_ratio: f64,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    // === Quote filing options ===
    /// Path to a library JSON file to append the reconstructed text to
    #[arg(short = 'l', long)]
    library: Option<PathBuf>,

    /// Title of the book to file the quote under (created if missing)
    #[arg(short = 'b', long)]
    book: Option<String>,

    /// Author recorded if --book has to create the book
    #[arg(long)]
    author: Option<String>,

    /// Page reference recorded on the saved quote
    #[arg(short = 'p', long)]
    page: Option<String>,

    /// Note recorded on the saved quote
    #[arg(short = 'n', long)]
    note: Option<String>,
}

/// Build ReflowParams from command line arguments.
fn build_params(args: &Args) -> Result<ReflowParams> {
    if !args.gap_ratio.is_finite() || args.gap_ratio <= 0.0 {
        return Err(PassageError::InvalidArgument(format!(
            "gap-ratio must be a finite number greater than zero, got {}",
            args.gap_ratio
        )));
    }

    Ok(ReflowParams::new(args.gap_ratio))
}

/// Process a single recognition dump file.
fn process_file<W: Write>(path: &PathBuf, writer: &mut W, params: &ReflowParams) -> Result<String> {
    let data = std::fs::read(path)?;
    let text = extract_text(&data, Some(params.clone()))?;

    writeln!(writer, "{}", text)?;
    Ok(text)
}

/// Append reconstructed text to the library as a quote, creating the
/// library file and the book as needed.
fn file_quote(args: &Args, library_path: &PathBuf, book_title: &str, text: &str) -> Result<()> {
    let mut library = Library::load_or_default(library_path)?;

    let book_id = match library.book_by_title(book_title) {
        Some(book) => book.id,
        None => library.add_book(book_title, args.author.clone()),
    };

    library.save_quote(book_id, text, args.page.clone(), args.note.clone())?;
    library.save(library_path)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    FmtSubscriber::builder()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .compact()
        .init();

    let params = match build_params(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if args.book.is_some() != args.library.is_some() {
        eprintln!("Error: --library and --book must be given together");
        std::process::exit(1);
    }

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    // Process each input file
    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            std::process::exit(1);
        }

        let text = match process_file(path, &mut output, &params) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error processing {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };

        if let (Some(library_path), Some(book_title)) = (&args.library, &args.book) {
            if let Err(e) = file_quote(&args, library_path, book_title, &text) {
                eprintln!("Error saving quote to {}: {}", library_path.display(), e);
                std::process::exit(1);
            }
        }
    }

    output.flush()?;
    Ok(())
}
