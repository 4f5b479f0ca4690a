use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sentence::Corpus;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod retry;
mod source;

use output::{OutputFormat, Printer};

#[derive(Parser)]
#[command(name = "sentence")]
#[command(about = "Print random sentences from an NDJSON dataset", version)]
struct Args {
    /// Read sentences from this NDJSON file instead of the embedded dataset
    #[arg(short, long, global = true, env = "SENTENCE_FILE")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value_t = OutputFormat::Text, env = "SENTENCE_FORMAT")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print random sentences (default)
    Random(commands::random::RandomArgs),
    /// Print the sentence at a line position
    Get {
        /// Zero-based position among non-empty lines
        line: usize,
    },
    /// Show dataset statistics
    Stats,
    /// Decode every line and report malformed ones
    Validate,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries records
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("sentence=info".parse()?))
        .init();

    let args = Args::parse();

    let data = args.file.as_deref().map(source::read_dataset).transpose()?;
    let file_corpus = data.as_deref().map(Corpus::new);
    let corpus = match &file_corpus {
        Some(corpus) => corpus,
        None => {
            debug!("Using embedded dataset");
            sentence::embedded()
        }
    };

    let color = !args.no_color && std::io::stdout().is_terminal();
    let printer = Printer::new(args.format, color);

    match args.command.unwrap_or_default() {
        Command::Random(random_args) => commands::random::run(corpus, &random_args, &printer),
        Command::Get { line } => commands::get::run(corpus, line, &printer),
        Command::Stats => commands::stats::run(corpus, &printer),
        Command::Validate => commands::validate::run(corpus),
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Random(commands::random::RandomArgs::default())
    }
}
