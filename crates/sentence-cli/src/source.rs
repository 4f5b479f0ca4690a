//! Loading an external dataset file.

use std::fs;
use std::path::Path;

use sentence::Result;
use tracing::info;

/// Read a whole NDJSON file into memory
pub fn read_dataset(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)?;
    info!("Loaded {} bytes from {}", data.len(), path.display());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentence::{Corpus, Error};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_dataset() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"name":"a","from":"x"}}"#).unwrap();
        writeln!(file).unwrap();
        write!(file, r#"{{"name":"b","from":"y"}}"#).unwrap();
        file.flush().unwrap();

        let data = read_dataset(file.path()).unwrap();
        let corpus = Corpus::new(&data);

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(0).unwrap().name(), Some("a"));
        assert_eq!(corpus.get(1).unwrap().attribution(), Some("y"));
    }

    #[test]
    fn test_read_dataset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_dataset(&dir.path().join("missing.jsonl")).unwrap_err();

        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }
}
