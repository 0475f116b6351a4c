use std::path::Path;

use thiserror::Error;

use search_core::FlatTextSource;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a plain text file into a flat source, normalizing CRLF line endings
/// so buffer offsets are stable across platforms.
pub fn load_text(path: &Path) -> Result<FlatTextSource, TextError> {
    let raw = std::fs::read_to_string(path)?;
    let normalized = if raw.contains('\r') {
        raw.replace("\r\n", "\n")
    } else {
        raw
    };
    Ok(FlatTextSource::new(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "line one\nline two\n").unwrap();
        let source = load_text(file.path()).unwrap();
        assert_eq!(source.text(), "line one\nline two\n");
    }

    #[test]
    fn normalizes_crlf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one\r\ntwo\r\n").unwrap();
        let source = load_text(file.path()).unwrap();
        assert_eq!(source.text(), "one\ntwo\n");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_text(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, TextError::Io(_)));
    }
}
