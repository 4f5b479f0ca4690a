//! Validate command implementation.

use anyhow::{Result, bail};
use sentence::{Corpus, Error};

/// Decode every line, failing if any line is malformed
pub fn run(corpus: &Corpus) -> Result<()> {
    if corpus.is_empty() {
        return Err(Error::EmptyDataset.into());
    }

    let failures = corpus.validate();
    if failures.is_empty() {
        println!("All {} lines decode", corpus.len());
        return Ok(());
    }

    for failure in &failures {
        println!("  {}", failure);
    }
    bail!(
        "{} of {} lines failed to decode",
        failures.len(),
        corpus.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let corpus = Corpus::new(b"{\"name\":\"a\"}\n{\"name\":\"b\"}\n");
        assert!(run(&corpus).is_ok());
    }

    #[test]
    fn test_validate_reports_failures() {
        let corpus = Corpus::new(b"{\"name\":\"a\"}\n{not valid json}\n");
        let err = run(&corpus).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 lines failed to decode");
    }

    #[test]
    fn test_validate_empty() {
        let corpus = Corpus::new(b"\n\n");
        let err = run(&corpus).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::EmptyDataset)
        ));
    }
}
