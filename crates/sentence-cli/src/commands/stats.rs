//! Stats command implementation.

use anyhow::Result;
use sentence::Corpus;

use crate::output::Printer;

/// Run the stats command
pub fn run(corpus: &Corpus, printer: &Printer) -> Result<()> {
    let stats = corpus.stats();
    println!("{}", printer.format_stats(&stats)?);
    Ok(())
}
