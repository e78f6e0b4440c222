mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "pdsect",
    version,
    about = "Extract the table of contents and sections from USB PD specification PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a PDF into TOC entries and sections
    Parse {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Document title for emitted records (default: guessed from page 1)
        #[arg(short, long)]
        title: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write toc.jsonl, sections.jsonl and metadata.jsonl to this directory
        #[arg(short = 'O', long = "out-dir", value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Parse a PDF and search its sections
    Search {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Search query (case-insensitive substring)
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Document title for emitted records
        #[arg(short, long)]
        title: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Parse a PDF and print extraction statistics
    Stats {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Document title for emitted records
        #[arg(short, long)]
        title: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    // RUST_LOG controls verbosity; default to info.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    tracing::debug!("logging setup complete");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            title,
            output,
            out_dir,
        } => commands::parse::run(input_file, title, &output, out_dir),
        Commands::Search {
            input_file,
            query,
            limit,
            title,
            output,
        } => commands::search::run(input_file, &query, limit, title, &output),
        Commands::Stats {
            input_file,
            title,
            output,
        } => commands::stats::run(input_file, title, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
