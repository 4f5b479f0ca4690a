//! The sentence dataset compiled into the binary.
//!
//! The buffer comes from `include_bytes!`, so it is `'static` and is never
//! freed before process exit. Every slice handed out by [`embedded()`]
//! borrows from it and can never dangle.

use crate::corpus::Corpus;
use crate::error::Result;
use crate::record::Record;

const SENTENCE_DATA: &[u8] = include_bytes!("../data/sentences.jsonl");

static EMBEDDED: Corpus<'static> = Corpus::new(SENTENCE_DATA);

/// Process-wide corpus over the embedded dataset, indexed on first use
pub fn embedded() -> &'static Corpus<'static> {
    &EMBEDDED
}

/// Get a random sentence from the embedded dataset.
///
/// The result maps JSON field names to values, e.g. `name` (the sentence)
/// and `from` (its source).
pub fn random() -> Result<Record> {
    EMBEDDED.random()
}
