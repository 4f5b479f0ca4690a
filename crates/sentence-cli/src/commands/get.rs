//! Get command implementation.

use anyhow::Result;
use sentence::Corpus;

use crate::output::Printer;

/// Print the record at `line`
pub fn run(corpus: &Corpus, line: usize, printer: &Printer) -> Result<()> {
    let record = corpus.get(line)?;
    printer.print_record(&record)
}
