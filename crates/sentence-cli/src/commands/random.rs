//! Random command implementation.

use anyhow::Result;
use clap::Args;
use sentence::Corpus;

use crate::output::Printer;
use crate::retry::with_retry;

#[derive(Debug, Args)]
pub struct RandomArgs {
    /// Number of sentences to print
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for a reproducible sequence of draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Extra draws allowed when a selected line fails to decode
    #[arg(long, default_value_t = 0)]
    pub retries: u32,
}

impl Default for RandomArgs {
    fn default() -> Self {
        Self {
            count: 1,
            seed: None,
            retries: 0,
        }
    }
}

/// Run the random command
pub fn run(corpus: &Corpus, args: &RandomArgs, printer: &Printer) -> Result<()> {
    let mut rng = args.seed.map(fastrand::Rng::with_seed);

    for _ in 0..args.count {
        let record = with_retry(args.retries, || match rng.as_mut() {
            Some(rng) => corpus.random_with(rng),
            None => corpus.random(),
        })?;
        printer.print_record(&record)?;
    }

    Ok(())
}
