//! # sentence
//!
//! Random access to a newline-delimited JSON dataset embedded in the binary.
//!
//! This crate provides:
//! - A one-pass line index storing byte offsets only ([`LineIndex`])
//! - A lazily indexed, thread-safe view over any NDJSON buffer ([`Corpus`])
//! - A generic record type for decoded lines ([`Record`])
//! - The embedded sentence dataset ([`random`], [`embedded`])
//!
//! ## Example
//!
//! ```no_run
//! let record = sentence::random()?;
//! if let Some(name) = record.name() {
//!     println!("{}", name);
//! }
//! # Ok::<(), sentence::Error>(())
//! ```

pub mod corpus;
pub mod embedded;
pub mod error;
pub mod index;
pub mod record;

pub use corpus::{Corpus, CorpusStats};
pub use embedded::{embedded, random};
pub use error::{Error, Result};
pub use index::{LineIndex, LineSpan};
pub use record::Record;
