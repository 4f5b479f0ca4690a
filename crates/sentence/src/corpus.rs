//! Lazily indexed view over a newline-delimited JSON buffer.
//!
//! A [`Corpus`] owns nothing but a borrowed buffer and a once-initialized
//! [`LineIndex`]. The index is built on first access by exactly one caller;
//! concurrent first callers block on the same [`OnceLock`] and all observe
//! the finished index. After that the corpus is read-only and can be shared
//! across threads without locking.
//!
//! Lines are decoded on demand. Nothing decoded is cached, so every call
//! hands the caller a fresh [`Record`].

use std::sync::OnceLock;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::index::{LineIndex, LineSpan};
use crate::record::Record;

/// Summary of a corpus after indexing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    /// Number of non-empty lines
    pub lines: usize,
    /// Size of the raw buffer, separators and blank lines included
    pub bytes: usize,
    /// Bytes covered by indexed lines
    pub indexed_bytes: usize,
}

pub struct Corpus<'a> {
    data: &'a [u8],
    index: OnceLock<LineIndex>,
    #[cfg(test)]
    builds: AtomicUsize,
}

impl<'a> Corpus<'a> {
    /// Wrap a buffer without scanning it.
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            index: OnceLock::new(),
            #[cfg(test)]
            builds: AtomicUsize::new(0),
        }
    }

    /// Get the line index, building it on first use
    pub fn index(&self) -> &LineIndex {
        self.index.get_or_init(|| {
            #[cfg(test)]
            self.builds.fetch_add(1, Ordering::SeqCst);

            let index = LineIndex::build(self.data);
            debug!(
                "Indexed {} lines ({} of {} bytes)",
                index.len(),
                index.total_bytes(),
                self.data.len()
            );
            index
        })
    }

    pub fn is_indexed(&self) -> bool {
        self.index.get().is_some()
    }

    pub fn len(&self) -> usize {
        self.index().len()
    }

    pub fn is_empty(&self) -> bool {
        self.index().is_empty()
    }

    /// Decode a uniformly random line using the thread-local generator.
    ///
    /// Each call is an independent draw; the same line may come back on
    /// consecutive calls.
    pub fn random(&self) -> Result<Record> {
        self.draw(|len| fastrand::usize(..len))
    }

    /// Same as [`Corpus::random`], drawing from a caller-owned generator
    pub fn random_with(&self, rng: &mut fastrand::Rng) -> Result<Record> {
        self.draw(|len| rng.usize(..len))
    }

    /// Decode the line at `position` in index order
    pub fn get(&self, position: usize) -> Result<Record> {
        let index = self.index();
        if index.is_empty() {
            return Err(Error::EmptyDataset);
        }

        match index.get(position) {
            Some(span) => self.decode_span(position, span),
            None => Err(Error::LineOutOfRange {
                line: position,
                len: index.len(),
            }),
        }
    }

    /// Borrow the whitespace-trimmed bytes of the line at `position`
    pub fn raw_line(&self, position: usize) -> Option<&'a [u8]> {
        self.index()
            .get(position)
            .map(|span| trim_line(span.slice(self.data)))
    }

    /// Decode every line, returning the failures in index order
    pub fn validate(&self) -> Vec<Error> {
        self.index()
            .iter()
            .enumerate()
            .filter_map(|(position, span)| self.decode_span(position, span).err())
            .collect()
    }

    pub fn stats(&self) -> CorpusStats {
        let index = self.index();
        CorpusStats {
            lines: index.len(),
            bytes: self.data.len(),
            indexed_bytes: index.total_bytes(),
        }
    }

    fn draw(&self, pick: impl FnOnce(usize) -> usize) -> Result<Record> {
        let index = self.index();
        if index.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let position = pick(index.len());
        match index.get(position) {
            Some(span) => self.decode_span(position, span),
            None => Err(Error::LineOutOfRange {
                line: position,
                len: index.len(),
            }),
        }
    }

    fn decode_span(&self, position: usize, span: LineSpan) -> Result<Record> {
        let line = trim_line(span.slice(self.data));
        Record::decode(line).map_err(|source| Error::Decode {
            line: position,
            source,
        })
    }

    #[cfg(test)]
    fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

/// Strip leading and trailing Unicode whitespace.
///
/// Invalid UTF-8 is only ASCII-trimmed and left for the decoder to reject.
fn trim_line(line: &[u8]) -> &[u8] {
    match std::str::from_utf8(line) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => line.trim_ascii(),
    }
}
