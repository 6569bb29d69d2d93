//! pdf2cards CLI - exam PDF to flashcard JSON converter

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf2cards::convert::{partition_pages, DEFAULT_ANSWER_PAGE_FALLBACK};
use pdf2cards::render::{write_json, JsonFormat};
use pdf2cards::{ConvertOptions, Converter, FormatTable, LopdfSource, QuestionFormat};

#[derive(Parser)]
#[command(name = "pdf2cards")]
#[command(version)]
#[command(about = "Convert exam PDFs with an answer key into flashcard JSON", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file (defaults to the input path with a .json extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// List supported formats and exit
    #[arg(long)]
    list_formats: bool,

    #[command(flatten)]
    convert: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct ConvertArgs {
    /// Force a question format (auto-detected if not specified)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Treat pages whose text cannot be extracted as empty
    #[arg(long)]
    lenient: bool,

    /// Apply Unicode NFKC normalization to page text
    #[arg(long)]
    normalize: bool,

    /// Zero-based page to read the answer key from when the last page is blank
    #[arg(
        long,
        value_name = "INDEX",
        env = "PDF2CARDS_FALLBACK_PAGE",
        default_value_t = DEFAULT_ANSWER_PAGE_FALLBACK
    )]
    fallback_page: usize,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,
}

impl ConvertArgs {
    fn to_options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::new()
            .with_answer_page_fallback(self.fallback_page)
            .with_normalization(self.normalize);

        if let Some(format) = self.format {
            options = options.with_format(format.into());
        }
        if self.lenient {
            options = options.lenient();
        }

        options
    }

    fn json_format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PDF to flashcard JSON
    Convert {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Show page and format information without writing anything
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        args: ConvertArgs,
    },

    /// List supported question formats
    Formats,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Multiple choice questions with A, B, C, D options
    #[value(name = "multiple_choice")]
    MultipleChoice,
    /// True/False questions
    #[value(name = "true_false")]
    TrueFalse,
}

impl From<FormatArg> for QuestionFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::MultipleChoice => QuestionFormat::MultipleChoice,
            FormatArg::TrueFalse => QuestionFormat::TrueFalse,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            args,
        }) => cmd_convert(&input, output.as_deref(), &args),
        Some(Commands::Info { input, args }) => cmd_info(&input, &args),
        Some(Commands::Formats) => cmd_formats(),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if cli.list_formats {
                cmd_formats()
            } else if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &cli.convert)
            } else {
                println!("{}", "Usage: pdf2cards <FILE> [OUTPUT]".yellow());
                println!("       pdf2cards --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Input path with its extension replaced by `.json`.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

fn ensure_input_exists(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' not found", input.display()).into());
    }
    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    args: &ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_input_exists(input)?;
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    println!("{} {}", "Processing PDF:".cyan(), input.display());

    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Extracting flashcards...");
    let converter = Converter::new(args.to_options())?;
    let result = converter.convert_file(input)?;
    pb.inc(1);

    pb.set_message("Writing JSON...");
    write_json(&result, &output_path, args.json_format())?;
    pb.inc(1);
    pb.finish_and_clear();

    let meta = &result.metadata;
    let origin = if args.format.is_some() {
        "forced"
    } else {
        "detected"
    };

    println!("{}", "Successfully converted!".green().bold());
    println!("  {}: {}", "Total pages".bold(), meta.total_pages);
    println!("  {}: {} ({})", "Format".bold(), meta.format_type, origin);
    println!("  {}: {}", "Questions extracted".bold(), meta.questions_extracted);
    println!("  {}: {}", "Answer key entries".bold(), meta.answer_key_entries);
    println!("  {}: {}", "Valid flashcards".bold(), meta.valid_flashcards);
    println!("  {}: {}", "Output saved to".bold(), output_path.display());

    if result.is_empty() {
        println!(
            "\n{}",
            "No flashcards were produced; check the answer key page and format.".yellow()
        );
    }

    Ok(())
}

fn cmd_info(input: &Path, args: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    ensure_input_exists(input)?;

    // Info should still show something for PDFs with unreadable pages.
    let converter = Converter::new(args.to_options().lenient())?;
    let source = LopdfSource::open(input)?;
    let pages = converter.read_pages(&source)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Version".bold(), source.version());
    println!("{}: {}", "Pages".bold(), pages.len());
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if source.is_encrypted() { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Page Text".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (index, text) in pages.iter().enumerate() {
        println!(
            "  {} {:>4}: {} chars",
            "page".dimmed(),
            index,
            text.trim().chars().count()
        );
    }

    println!();
    println!("{}", "Extraction Plan".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Format".bold(), converter.resolve_format(&pages));
    match partition_pages(&pages, converter.options()) {
        Ok(partition) => {
            let note = if partition.used_fallback {
                " (fallback, last page looks blank)"
            } else {
                ""
            };
            println!(
                "{}: page {}{}",
                "Answer key".bold(),
                partition.answer_page,
                note
            );
        }
        Err(e) => println!("{}: {}", "Answer key".bold(), e.to_string().red()),
    }

    Ok(())
}

fn cmd_formats() -> Result<(), Box<dyn std::error::Error>> {
    let table = FormatTable::new()?;

    println!("{}", "Supported formats:".cyan().bold());
    for config in table.iter() {
        println!("  {}: {}", config.format.to_string().bold(), config.description);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdf2cards".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Exam PDF to flashcard JSON converter");
    println!();
    println!("License: MIT");
}
